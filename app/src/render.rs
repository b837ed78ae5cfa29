use chatbot_core::ChatbotView;

pub fn render(view: &ChatbotView) -> String {
    let mut page = String::from("📄 AI PDF Chatbot\n");

    match view.selected_file() {
        Some(file) => page.push_str(&format!("📁 Selected File: {}\n", file.name)),
        None => page.push_str("📁 No file selected\n"),
    }

    if !view.question().is_empty() {
        page.push_str(&format!("❓ Question: {}\n", view.question()));
    }

    let status = view.status_message();
    if !status.is_empty() {
        page.push_str(&format!("ℹ️  {}\n", status));
    }
    if view.is_busy() {
        page.push_str("⏳ Busy, upload and ask are disabled\n");
    }

    if !view.answer().is_empty() {
        page.push_str(&format!("🧠 AI Answer\n{}\n", view.answer()));
    }

    page
}

pub fn notice(message: impl std::fmt::Display) -> String {
    format!("! {}\n", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbot_core::{Answer, SelectedFile};

    #[test]
    fn empty_view_has_no_answer_box() {
        let page = render(&ChatbotView::new());
        assert!(page.contains("No file selected"));
        assert!(!page.contains("AI Answer"));
    }

    #[test]
    fn shows_busy_marker_while_uploading() {
        let mut view = ChatbotView::new();
        view.select_file(SelectedFile::new("doc.pdf", Vec::new()));
        view.begin_upload().unwrap();

        let page = render(&view);
        assert!(page.contains("Selected File: doc.pdf"));
        assert!(page.contains("Uploading..."));
        assert!(page.contains("Busy"));
    }

    #[test]
    fn shows_answer_box() {
        let mut view = ChatbotView::new();
        view.set_question("What is the total?");
        view.begin_ask().unwrap();
        view.finish_ask(Ok(Answer {
            text: "$42".to_string(),
        }));

        let page = render(&view);
        assert!(page.contains("Question: What is the total?"));
        assert!(page.contains("AI Answer\n$42"));
        assert!(!page.contains("Busy"));
    }
}
