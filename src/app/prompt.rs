use crate::domain::model::SearchMode;
use std::io::{self, BufRead, Write};

const QUIT_WORDS: &[&str] = &["quit", "exit", "q"];

/// 互動式輸入，讀寫端可替換以便測試
pub struct Prompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// 讀取關鍵字；輸入 quit/exit/q 或輸入結束時回傳 None
    pub fn read_keyword(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.ask("\nEnter search keyword (or 'quit' to exit): ")? else {
                return Ok(None);
            };

            if QUIT_WORDS.contains(&line.to_lowercase().as_str()) {
                return Ok(None);
            }

            if line.is_empty() {
                self.say("Please enter a valid keyword.")?;
                continue;
            }

            return Ok(Some(line));
        }
    }

    pub fn read_mode(&mut self) -> io::Result<Option<SearchMode>> {
        self.say("\nSearch Mode Options:")?;
        self.say("1. Standard search (single query, faster)")?;
        self.say(
            "2. Enhanced search (adds phone, website and hours; one extra request per result)",
        )?;
        self.say("3. Variation search (several related queries, up to ~6x the requests)")?;

        loop {
            let Some(choice) = self.ask("Choose search mode (1, 2 or 3): ")? else {
                return Ok(None);
            };

            match choice.as_str() {
                "1" => return Ok(Some(SearchMode::Standard)),
                "2" => return Ok(Some(SearchMode::Enhanced)),
                "3" => return Ok(Some(SearchMode::Variations)),
                _ => self.say("Please enter 1, 2 or 3")?,
            }
        }
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
