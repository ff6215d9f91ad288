//! 看板页面外壳
//!
//! 图表在浏览器端绘制，数据来自 `/api/dashboard`

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
