//! # 定位器解析层
//!
//! 把人工书写的定位字符串解析成解析策略，在活动文档上轮询直到元素出现或
//! 超时，并对结果应用标签/属性过滤。
//!
//! ## 主要功能
//! - **前缀语法**: `type=criteria` 形式，`//` 开头直接按 XPath 处理
//! - **策略分发**: id、name、idorname、xpath、css、classname、tag、
//!   jquery/sizzle、linktext 九种策略
//! - **有界轮询**: 默认 20 秒超时、100 毫秒间隔，仅通过超时取消
//! - **结果过滤**: 按标签名（忽略大小写）和属性值（精确匹配）过滤
//! - **必需语义**: required 定位超时报错，可选定位返回空列表
//!
//! ## 核心概念
//! - **LocatorDispatcher**: 解析入口，缓存各策略的单例
//! - **LocatorStrategy**: 单一定位策略，lookup 一次、find 带轮询
//! - **LocatorContext**: 单次解析请求的不可变描述
//! - **ElementTag / StdTag**: 标准标签关键字到过滤条件的映射
//!
//! ## 模块结构
//! - `dispatcher`: 定位字符串解析和策略分发
//! - `strategy`: 策略 trait 和九种实现
//! - `context`: 单次解析的上下文值对象
//! - `tags`: 标准标签表和标签过滤器
//!
//! ## 使用示例
//! ```rust,no_run
//! use robokit::locator::{ElementTag, LocatorDispatcher};
//! use robokit::document::Document;
//!
//! # async fn example(document: &dyn Document) -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = LocatorDispatcher::new();
//!
//! // 按 id 查找，必需且只取第一个匹配
//! let elements = dispatcher
//!     .find(document, "id=login", None, true, true)
//!     .await?;
//!
//! // 过滤出复选框
//! let checkboxes = dispatcher
//!     .find(document, "name=agree", ElementTag::from_name("CHECKBOX"), false, false)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod dispatcher;
pub mod strategy;
pub mod tags;

pub use context::LocatorContext;
pub use dispatcher::{LocatorDispatcher, LocatorKind, ParsedLocator};
pub use strategy::LocatorStrategy;
pub use tags::{ElementTag, StdTag};
