//! 业务服务层
//!
//! 组合多个 store 的操作放在这里；单一 store 的 CRUD 由 handler 直接调用。
//!
//! - [`EmployeeService`] - 部门名快照与员工统计
//! - [`UserService`] - 用户更新 (密码先哈希)

pub mod employee;
pub mod user;

pub use employee::EmployeeService;
pub use user::UserService;
