//! # 文档抽象层
//!
//! 对被测页面的抽象：定位策略通过这里的接口查询活动文档，而不关心底层
//! 驱动协议。真正的浏览器/驱动实现由调用方提供。
//!
//! ## 主要功能
//! - **原生查找**: 按 id、name、CSS、XPath、class、标签名、链接文本查找元素
//! - **选择器引擎**: 注入式 Sizzle/jQuery 风格选择器求值
//! - **元素信息**: 标签名、属性表和文本内容，供过滤和断言使用
//! - **驱动会话**: 可释放的驱动句柄同时暴露文档视图
//!
//! ## 核心概念
//! - **Document**: 活动文档的查询接口，每个方法对应一种原生查找原语
//! - **ElementInfo**: 查找结果中单个元素的数据快照
//! - **DriverSession**: `Resource` + `Document`，会话注册表管理的驱动句柄
//!
//! ## 模块结构
//! - `traits`: 文档和驱动会话的核心 trait 定义
//! - `mock`: 用于测试的内存文档实现

pub mod mock;
pub mod traits;

pub use traits::{Document, DriverSession, ElementInfo};

// Re-export mock implementations for testing
#[cfg(test)]
pub use mock::MockDriver;
