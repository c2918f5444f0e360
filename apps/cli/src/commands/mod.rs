//! 命令定义和实现

pub mod aim;
pub mod exec;
pub mod run;
pub mod sets;

pub use aim::AimCommand;
pub use exec::ExecCommand;
pub use run::RunCommand;
pub use sets::SetsCommand;
