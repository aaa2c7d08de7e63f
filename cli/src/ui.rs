use colored::Colorize;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {title} ====").cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

fn ensure_line_start(output: &mut String) {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
}

fn style_heading(level: HeadingLevel, text: &str) -> String {
    match level {
        HeadingLevel::H1 => text.cyan().bold().to_string(),
        HeadingLevel::H2 => format!("  {}", text.yellow().bold()),
        _ => format!("    {}", text.bold()),
    }
}

/// Renders Markdown for the terminal from parser events
fn for_terminal(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut output = String::with_capacity(markdown.len() * 2);
    let mut heading: Option<(HeadingLevel, String)> = None;
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut emphasis = false;
    let mut strong = false;

    for event in Parser::new_ext(markdown, options) {
        let inline = match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((level, String::new()));
                None
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = heading.take() {
                    ensure_line_start(&mut output);
                    output.push_str(&style_heading(level, &text));
                    output.push_str("\n\n");
                }
                None
            }
            Event::Start(Tag::List(first)) => {
                lists.push(first);
                None
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                if lists.is_empty() {
                    output.push('\n');
                }
                None
            }
            Event::Start(Tag::Item) => {
                ensure_line_start(&mut output);
                let indent = "  ".repeat(lists.len() + 1);
                let marker = match lists.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{number}.");
                        *number += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                output.push_str(&format!("{indent}{} ", marker.bright_black()));
                None
            }
            Event::End(TagEnd::Item) => {
                ensure_line_start(&mut output);
                None
            }
            Event::End(TagEnd::Paragraph) if lists.is_empty() => {
                output.push_str("\n\n");
                None
            }
            Event::End(TagEnd::Paragraph | TagEnd::CodeBlock) => {
                ensure_line_start(&mut output);
                None
            }
            Event::Start(Tag::Emphasis) => {
                emphasis = true;
                None
            }
            Event::End(TagEnd::Emphasis) => {
                emphasis = false;
                None
            }
            Event::Start(Tag::Strong) => {
                strong = true;
                None
            }
            Event::End(TagEnd::Strong) => {
                strong = false;
                None
            }
            Event::Text(text) => Some(match (strong, emphasis) {
                (true, _) => text.bold().to_string(),
                (false, true) => text.italic().to_string(),
                (false, false) => text.into_string(),
            }),
            Event::Code(code) => Some(format!("`{code}`").yellow().to_string()),
            Event::TaskListMarker(done) => Some(if done { "[x] " } else { "[ ] " }.to_string()),
            Event::SoftBreak => Some(" ".to_string()),
            Event::HardBreak => Some("\n".to_string()),
            _ => None,
        };

        if let Some(inline) = inline {
            match heading.as_mut() {
                Some((_, text)) => text.push_str(&inline),
                None => output.push_str(&inline),
            }
        }
    }

    let mut rendered = output.trim_end_matches('\n').to_string();
    rendered.push('\n');
    rendered
}

/// Print changelog Markdown with headings, lists and inline markup highlighted
pub fn render_markdown(markdown: &str) {
    println!();
    print!("{}", for_terminal(markdown));
}
