//! Text rendering for the menu, the payoff table and results.

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use fair_rps_core::{HmacDigest, MoveSet, Outcome, PayoffTable, Reveal};
use std::io::{self, Write};

pub const PROMPT: &str = "Enter your move: ";
pub const TABLE_CORNER: &str = "v PC\\User >";

/// Digest line, numbered moves, exit/help options and the prompt
pub fn write_menu(out: &mut impl Write, digest: &HmacDigest, moves: &MoveSet) -> io::Result<()> {
    writeln!(out, "HMAC: {}", digest)?;
    writeln!(out, "Available moves:")?;
    for (i, m) in moves.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, m)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")?;
    write!(out, "{}", PROMPT)?;
    out.flush()
}

pub fn write_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()
}

/// Bordered payoff table, rows = computer move, columns = player move
pub fn write_help(out: &mut impl Write, moves: &MoveSet, payoff: &PayoffTable) -> io::Result<()> {
    let mut header = vec![TABLE_CORNER.to_string()];
    header.extend(moves.iter().map(|m| m.to_string()));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    for (m, outcomes) in moves.iter().zip(payoff.rows()) {
        let mut row = vec![m.to_string()];
        row.extend(outcomes.iter().map(|o| o.as_str().to_string()));
        table.add_row(row);
    }

    writeln!(out, "{}", table)
}

pub fn result_line(reveal: &Reveal) -> String {
    let head = match reveal.outcome {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose!",
        Outcome::Draw => "Draw!",
    };
    format!("{} HMAC key: {}", head, reveal.key)
}

/// Both moves, then the outcome with the revealed key
pub fn write_result(out: &mut impl Write, reveal: &Reveal) -> io::Result<()> {
    writeln!(out, "Your move: {}", reveal.human_move)?;
    writeln!(out, "Computer move: {}", reveal.opponent_move)?;
    writeln!(out, "{}", result_line(reveal))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_rps_core::{compute_hmac, Move, RelationTable, SecretKey};
    use unicode_width::UnicodeWidthStr;

    fn rps() -> MoveSet {
        MoveSet::validate(["Rock", "Paper", "Scissors"]).unwrap()
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_menu_layout() {
        let key = SecretKey::from_bytes([0u8; 32]);
        let digest = compute_hmac(&key, "Rock").unwrap();
        let text = render(|out| write_menu(out, &digest, &rps()));

        assert_eq!(
            text,
            "HMAC: 077e0d89e978f4583e8946b6d3af7a2317f037e5029d9d9abe93077fbc4960d0\n\
             Available moves:\n\
             1 - Rock\n\
             2 - Paper\n\
             3 - Scissors\n\
             0 - exit\n\
             ? - help\n\
             Enter your move: "
        );
    }

    /// Cell text of each table line, dropping borders and rules
    fn cells(text: &str) -> Vec<Vec<&str>> {
        text.lines()
            .map(|line| {
                line.split_whitespace()
                    .filter(|t| t.chars().any(char::is_alphanumeric))
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect()
    }

    #[test]
    fn test_help_table() {
        let moves = rps();
        let payoff = RelationTable::build(&moves).payoff_table();
        let text = render(|out| write_help(out, &moves, &payoff));

        assert_eq!(
            cells(&text),
            vec![
                vec!["v", "PC\\User", "Rock", "Paper", "Scissors"],
                vec!["Rock", "Draw", "Win", "Lose"],
                vec!["Paper", "Lose", "Draw", "Win"],
                vec!["Scissors", "Win", "Lose", "Draw"],
            ]
        );
        assert!(text.contains(TABLE_CORNER));

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        let last = lines[lines.len() - 1];
        assert!(last.starts_with('└') && last.ends_with('┘'));
    }

    #[test]
    fn test_help_table_aligns_wide_names() {
        let moves = MoveSet::validate(["石", "紙", "剪刀", "Lizard", "Spock"]).unwrap();
        let payoff = RelationTable::build(&moves).payoff_table();
        let text = render(|out| write_help(out, &moves, &payoff));

        let rows = cells(&text);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[3], vec!["剪刀", "Lose", "Lose", "Draw", "Win", "Win"]);

        let width = UnicodeWidthStr::width(text.lines().next().unwrap());
        assert!(text.lines().all(|l| UnicodeWidthStr::width(l) == width));
    }

    #[test]
    fn test_result_lines() {
        let key = SecretKey::from_bytes([0xab; 32]);
        let mut reveal = Reveal {
            outcome: Outcome::Win,
            key: key.clone(),
            opponent_move: Move::from("Rock"),
            opponent_index: 0,
            human_move: Move::from("Paper"),
            human_index: 1,
            digest: compute_hmac(&key, "Rock").unwrap(),
        };

        assert_eq!(result_line(&reveal), format!("You win! HMAC key: {}", key.to_hex()));
        reveal.outcome = Outcome::Lose;
        assert_eq!(result_line(&reveal), format!("You lose! HMAC key: {}", key.to_hex()));
        reveal.outcome = Outcome::Draw;
        assert_eq!(result_line(&reveal), format!("Draw! HMAC key: {}", key.to_hex()));

        let text = render(|out| write_result(out, &reveal));
        assert!(text.starts_with("Your move: Paper\nComputer move: Rock\nDraw! HMAC key: "));
    }
}
