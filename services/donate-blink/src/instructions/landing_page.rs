use axum::response::Html;

pub const LANDING_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Market Spy donations</title></head>
  <body>
    <main>
      <p>This is a Solana blink.</p>
      <a href="https://donate.marketspy.au/" target="_blank" rel="noopener noreferrer">donate.marketspy.au</a>
    </main>
  </body>
</html>
"#;

pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
