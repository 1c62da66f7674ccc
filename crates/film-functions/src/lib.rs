//! 映画 API の Lambda ハンドラー群
//!
//! 各ハンドラーは API Gateway のプロキシイベントを受け取り、
//! [`FilmRepository`](infrastructure::FilmRepository) に処理を委譲してレスポンスを組み立てる。

pub mod function;
pub mod functions;
pub mod lambda;
pub mod request;
pub mod response;
pub mod router;

pub use function::{invoke, FilmFunction};
pub use functions::*;
pub use router::FilmRouter;
