//! Domain primitives, ports, and resource services.
//!
//! Purpose: hold the decision logic of the API — identifier validation,
//! sort/filter clause building, existence resolution, and the per-resource
//! operations — free of HTTP and SQL concerns. Inbound adapters translate
//! requests into these types; outbound adapters implement the ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — the failure taxonomy every operation returns.
//! - `ArticleId` / `CommentId` — validated numeric keys.
//! - `Topic`, `User`, `Article`, `Comment`, `NewComment` — entities.
//! - `ArticleSort`, `CommentSort`, `SortOrder` — validated sort clauses.
//! - `ExistenceResolver` — empty-vs-missing disambiguation.
//! - `TopicsService`, `UsersService`, `ArticlesService`, `CommentsService` —
//!   the resource operations.

pub mod article;
pub mod articles_service;
pub mod comment;
pub mod comments_service;
pub mod error;
pub mod existence;
pub mod ids;
pub mod ports;
pub mod sorting;
pub mod topic;
pub mod topics_service;
pub mod user;
pub mod users_service;

pub use self::article::{Article, ArticleFilter};
pub use self::articles_service::ArticlesService;
pub use self::comment::{Comment, NewComment};
pub use self::comments_service::CommentsService;
pub use self::error::{Error, ErrorCode, INVALID_INPUT_MSG};
pub use self::existence::{EntityRef, ExistenceResolver};
pub use self::ids::{ArticleId, CommentId};
pub use self::sorting::{ArticleSort, CommentSort, SortOrder};
pub use self::topic::Topic;
pub use self::topics_service::TopicsService;
pub use self::user::User;
pub use self::users_service::UsersService;

/// Convenient result alias for core operations.
pub type ApiResult<T> = Result<T, Error>;
