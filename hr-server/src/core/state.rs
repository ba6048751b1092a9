use std::sync::Arc;

use crate::auth::{CredentialService, JwtService};
use crate::core::{Config, Result};
use crate::services::{EmployeeService, UserService};
use crate::store::{DepartmentStore, EmployeeStore, UserStore};

/// 服务器状态 - 持有所有 store 和服务的共享引用
///
/// 使用 Arc 实现浅拷贝。每个 store 各自持锁，互不嵌套。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | users | Arc<UserStore> | 用户 |
/// | employees | Arc<EmployeeStore> | 员工 |
/// | departments | Arc<DepartmentStore> | 部门 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    pub users: Arc<UserStore>,
    pub employees: Arc<EmployeeStore>,
    pub departments: Arc<DepartmentStore>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替
    pub fn new(
        config: Config,
        users: Arc<UserStore>,
        employees: Arc<EmployeeStore>,
        departments: Arc<DepartmentStore>,
    ) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            users,
            employees,
            departments,
            jwt_service,
        }
    }

    /// 初始化服务器状态，所有 store 载入种子数据
    pub fn initialize(config: &Config) -> Result<Self> {
        let state = Self::new(
            config.clone(),
            Arc::new(UserStore::seeded()?),
            Arc::new(EmployeeStore::seeded()),
            Arc::new(DepartmentStore::seeded()),
        );

        tracing::info!(
            users = state.users.len(),
            employees = state.employees.len(),
            departments = state.departments.len(),
            "Seed data loaded"
        );
        Ok(state)
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn credentials(&self) -> CredentialService {
        CredentialService::new(self.users.clone(), self.jwt_service.clone())
    }

    pub fn employee_service(&self) -> EmployeeService {
        EmployeeService::new(self.employees.clone(), self.departments.clone())
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.users.clone())
    }
}
