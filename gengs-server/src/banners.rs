//! Plain-text banner handlers for the base routes.

/// GET / - welcome banner
pub async fn home() -> &'static str {
    "Halo, GenGs! Selamat datang di server pertama kamu!🚀"
}

/// GET /about
pub async fn about() -> &'static str {
    "Hello World! Kamu sudah belajar backend dengan Rust dan Axum.🔥"
}
