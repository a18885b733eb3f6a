use std::io::{self, BufRead, Write};

/// Asks how many tickets to export, re-prompting until the input is empty
/// (no limit) or a positive integer.
pub fn prompt_for_limit() -> io::Result<Option<usize>> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("How many tickets do you want to export? (press Enter for all tickets): ");
        io::stdout().flush()?;

        line.clear();
        stdin.lock().read_line(&mut line)?;

        match parse_limit(&line) {
            Ok(limit) => return Ok(limit),
            Err(message) => println!("{}", message),
        }
    }
}

fn parse_limit(input: &str) -> Result<Option<usize>, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<i64>() {
        Ok(n) if n > 0 => Ok(Some(n as usize)),
        Ok(_) => Err("Please enter a positive number."),
        Err(_) => Err("Please enter a valid number."),
    }
}
