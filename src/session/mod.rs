//! # 会话注册层
//!
//! 管理外部资源会话（数据库连接、浏览器驱动）的生命周期，提供"当前会话"
//! 语义和按别名或会话 ID 的确定性寻址。
//!
//! ## 主要功能
//! - **会话注册**: 注册调用方打开的资源句柄并分配会话 ID
//! - **当前会话**: 选择栈顶的会话即为当前会话，新注册的会话自动置顶
//! - **双重寻址**: 同时支持系统生成的 UUID 和调用方别名
//! - **会话切换**: 按 ID 或别名把任意已注册会话置为当前会话
//! - **批量清理**: 尽力释放所有资源并聚合失败信息
//! - **并发安全**: 所有簿记操作都在单把锁下完成
//!
//! ## 核心概念
//! - **Resource**: 外部资源句柄的释放能力抽象
//! - **SessionRegistry**: 按资源种类实例化的通用注册表
//! - **别名寻址**: 别名经固定命名空间哈希映射到与会话 ID 相同的键空间
//!
//! ## 模块结构
//! - `traits`: 资源句柄的核心 trait 定义
//! - `address`: 别名/会话 ID 共享寻址工具
//! - `registry`: 通用会话注册表实现
//! - `mock`: 用于测试的 Mock 资源实现
//!
//! ## 使用示例
//! ```rust,no_run
//! use robokit::session::{SessionRegistry, mock::MockConnection};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry: SessionRegistry<MockConnection> = SessionRegistry::new();
//!
//! // 注册一个连接并命名别名
//! let session_id = registry.register(Arc::new(MockConnection::new("db")), "reporting")?;
//!
//! // 之后可按别名或会话 ID 寻址
//! let _connection = registry.get("reporting");
//! registry.close_all().await?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod mock;
pub mod registry;
pub mod traits;


pub use registry::{SessionRegistry, SessionRecord};
pub use traits::{DatabaseConnection, Resource};

// Re-export mock implementations for testing
#[cfg(test)]
pub use mock::MockConnection;
