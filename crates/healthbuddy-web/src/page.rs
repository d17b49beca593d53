use healthbuddy_core::Message;
use minijinja::{context, Environment};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Renders the single chat page. Templates ending in `.html` are
/// auto-escaped, so message text can never inject markup.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, messages: &[Message], error: Option<&str>) -> Result<String, minijinja::Error> {
        self.env.get_template("index.html")?.render(context! {
            messages => messages,
            error => error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_page() {
        let html = PageRenderer::new().unwrap().render(&[], None).unwrap();

        assert!(html.contains("<title>Health Buddy AI</title>"));
        assert!(html.contains("Chat with Health Buddy AI"));
        assert!(html.contains("Ask your health question here..."));
        assert!(html.contains("Made with ❤️ for better health"));
        assert!(!html.contains("class=\"chat-message"));
        assert!(!html.contains("class=\"error-banner\""));
    }

    #[test]
    fn test_render_transcript_in_order() {
        let messages = vec![Message::human("Best sleep time?"), Message::ai("10 baje tak so jao!")];
        let html = PageRenderer::new().unwrap().render(&messages, None).unwrap();

        let user = html.find("Best sleep time?").unwrap();
        let assistant = html.find("10 baje tak so jao!").unwrap();
        assert!(user < assistant);
        assert!(html.contains("<b>You:</b>"));
        assert!(html.contains("<b>Health Buddy:</b>"));
    }

    #[test]
    fn test_message_content_is_escaped() {
        let messages = vec![Message::human("<script>alert(1)</script>")];
        let html = PageRenderer::new().unwrap().render(&messages, None).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_banner() {
        let html = PageRenderer::new()
            .unwrap()
            .render(&[], Some("Could not reach the AI service"))
            .unwrap();

        assert!(html.contains("class=\"error-banner\""));
        assert!(html.contains("Could not reach the AI service"));
    }
}
