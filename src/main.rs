use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use skycard_core::{App, Locale};
use skycard_ui::render::paint;
use skycard_ui::{render, LocateStart, WeatherWidget, WidgetServices};

enum Command {
    Locate,
    Help,
    Quit,
    Search(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "/konum" | "/location" => Command::Locate,
        "/yardim" | "/help" => Command::Help,
        "/cikis" | "/quit" => Command::Quit,
        _ => Command::Search(line.to_string()),
    }
}

fn print_card(out: &mut impl Write, widget: &WeatherWidget, color: bool) -> Result<()> {
    let card = render(widget);
    tracing::debug!(
        "Rendering {} card with theme {}",
        widget.condition().as_str(),
        card.theme.id
    );

    for (i, line) in card.lines.iter().enumerate() {
        if color && i == 0 {
            writeln!(out, "{}", paint(line, &card.theme))?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    skycard_core::init()?;

    let mut app = App::new().map_err(|e| {
        eprintln!("{}", e.user_message(Locale::default()));
        anyhow::Error::from(e)
    })?;

    let services = WidgetServices::from_config(app.config())?;
    let mut widget = WeatherWidget::from_config(app.config());
    let color = app.config().ui.color;

    tracing::info!("SkyCard started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    print_card(&mut stdout, &widget, color)?;
    writeln!(stdout, "{}", widget.strings().help)?;

    loop {
        write!(stdout, "{} > ", widget.strings().input_placeholder)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        widget.poll_messages(&services);

        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => {
                writeln!(stdout, "{}", widget.strings().help)?;
                continue;
            }
            Command::Locate => {
                if widget.locate(&services) == LocateStart::Started {
                    print_card(&mut stdout, &widget, color)?;
                    if let Some(message) = services.recv() {
                        widget.handle_message(message);
                    }
                }
            }
            Command::Search(text) => {
                widget.set_city_input(text.trim_end_matches(['\r', '\n']));
                if !widget.submit_city() {
                    continue;
                }
            }
        }

        print_card(&mut stdout, &widget, color)?;
    }

    app.shutdown()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse_command("/konum\n"), Command::Locate));
        assert!(matches!(parse_command(" /location "), Command::Locate));
        assert!(matches!(parse_command("/quit"), Command::Quit));
        assert!(matches!(parse_command("/cikis"), Command::Quit));
        assert!(matches!(parse_command("/help"), Command::Help));
        assert!(matches!(parse_command("/yardim"), Command::Help));
        assert!(matches!(parse_command("Ankara\n"), Command::Search(ref s) if s == "Ankara\n"));
    }

    #[test]
    fn test_print_card_plain() {
        let widget = WeatherWidget::new(Locale::En);
        let mut out = Vec::new();
        print_card(&mut out, &widget, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Weather\n"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_print_card_colored_header() {
        let widget = WeatherWidget::new(Locale::Tr);
        let mut out = Vec::new();
        print_card(&mut out, &widget, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[48;2;"));
    }
}
