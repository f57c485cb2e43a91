//! Command implementations.

pub mod ask;
pub mod category;
pub mod delete;
pub mod extract;
pub mod faq;
pub mod ingest;
pub mod search;
pub mod show;

pub use self::ask::execute_ask;
pub use self::category::{execute_categories, execute_category};
pub use self::delete::execute_delete;
pub use self::extract::execute_extract;
pub use self::faq::execute_faq;
pub use self::ingest::execute_ingest;
pub use self::search::execute_search;
pub use self::show::execute_show;

use crate::config::AnswerBackend;
use dermkb_engine::KnowledgeEngine;

/// The engine type every command operates on
pub type Engine = KnowledgeEngine<AnswerBackend>;
