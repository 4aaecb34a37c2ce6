use axum::http::{header, HeaderName};

/// Headers every action endpoint returns so browser based wallets can call it.
pub const ACTIONS_CORS_HEADERS: [(HeaderName, &str); 4] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,PUT,OPTIONS"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Content-Type, Authorization, Content-Encoding, Accept-Encoding",
    ),
    (
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        "X-Action-Version, X-Blockchain-Ids",
    ),
];
