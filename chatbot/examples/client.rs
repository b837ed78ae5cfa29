use chatbot_core::{pick_pdf, ChatbotBackend, ChatbotView, ClientConfig, HttpBackend};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let pdf_path = PathBuf::from(args.next().unwrap_or_else(|| "document.pdf".to_string()));
    let question = args
        .next()
        .unwrap_or_else(|| "What are the main topics discussed in this document?".to_string());

    let backend = HttpBackend::new(ClientConfig::from_env()?);
    let mut view = ChatbotView::new();

    println!("🔍 Testing PDF Chatbot Client against {}", backend.config().backend_origin());

    println!("\n📋 Health Check:");
    match backend.health().await {
        Ok(banner) => println!("Response: {}", banner),
        Err(e) => println!("Backend unreachable: {}", e),
    }

    println!("\n📤 Upload:");
    view.select_file(pick_pdf(&pdf_path).await?);
    view.submit_upload(&backend).await?;
    println!("Status: {}", view.status_message());

    println!("\n💬 Question: {}", question);
    view.set_question(question);
    view.submit_question(&backend).await?;
    println!("Status: {}", view.status_message());
    println!("Answer: {}", view.answer());

    println!("\n✅ Client test completed!");
    Ok(())
}
