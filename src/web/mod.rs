//! Server-rendered HTML pages (Askama templates under `templates/`)

pub mod handlers;
