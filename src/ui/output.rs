use colored::Colorize;
use regex::Regex;

/// Render the assistant's `**bold**` rich-text markup as terminal bold.
/// Everything outside the markers passes through untouched.
pub fn render_rich(text: &str) -> String {
    let re = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    re.replace_all(text, |caps: &regex::Captures| {
        caps[1].bold().to_string()
    })
    .into_owned()
}

/// Print an assistant reply to stdout.
pub fn print_reply(text: &str) {
    println!("{}", render_rich(text));
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

/// The blocking safety alert. Printed instead of sending the message;
/// nothing is persisted and nothing reaches the generation path.
pub fn print_safety_alert() {
    println!("{}", "SAFETY ALERT".red().bold());
    println!("We noticed language in your message that worries us. You don't have to carry this alone.");
    println!(
        "{}",
        "Please call your local emergency number (911) or the 988 crisis line right now.".bold()
    );
    println!("{}", "Your message was not sent.".dimmed());
}
