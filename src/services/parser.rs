//! Best-effort scraping of the curator's free-text reply.
//!
//! The prompt asks for numbered titles with `Description:` and
//! `Match Score:` lines, but models drift from the format. The parser
//! works per paragraph: find a title line, find a description line, find
//! a score line, and fall back to defaults instead of failing. A reply
//! that yields nothing usable is the caller's problem.

use regex::Regex;

use crate::models::Movie;

/// Score used when the reply has no usable `Match Score:` line
pub const DEFAULT_MATCH_SCORE: u32 = 85;

/// Everything scraped out of one reply
#[derive(Debug, Default, PartialEq)]
pub struct ParsedReply {
    pub movies: Vec<Movie>,
    pub viewer_profile: Option<String>,
}

pub struct ReplyParser {
    title_prefix: Regex,
    description_label: Regex,
    score_label: Regex,
    profile_label: Regex,
    number: Regex,
}

impl ReplyParser {
    pub fn new() -> Self {
        Self {
            title_prefix: Regex::new(r"^\s*\d+\.\s*").expect("invalid title pattern"),
            description_label: Regex::new(r"(?i)description\s*:\s*").expect("invalid description pattern"),
            score_label: Regex::new(r"(?i)match\s*score\s*:").expect("invalid score pattern"),
            profile_label: Regex::new(r"(?i)viewer\s*profile\s*:\s*").expect("invalid profile pattern"),
            number: Regex::new(r"\d+").expect("invalid number pattern"),
        }
    }

    /// Scrapes movies and an optional viewer profile out of a reply.
    /// Never fails; unusable paragraphs are skipped.
    pub fn parse(&self, reply: &str) -> ParsedReply {
        let mut parsed = ParsedReply::default();

        for block in reply.split("\n\n") {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }

            let lines: Vec<&str> = block.lines().map(str::trim).collect();

            if let Some(profile) = self.extract_profile(&lines) {
                parsed.viewer_profile.get_or_insert(profile);
                continue;
            }

            if let Some(movie) = self.extract_movie(&lines) {
                parsed.movies.push(movie);
            }
        }

        parsed
    }

    /// A paragraph whose first line carries `Viewer Profile:` is the
    /// profile; the label is dropped and the rest of the paragraph kept.
    fn extract_profile(&self, lines: &[&str]) -> Option<String> {
        let first = *lines.first()?;
        let label = self.profile_label.find(first)?;
        if label.start() > 2 {
            // Label buried mid-sentence, not a profile paragraph. The
            // allowance is for markdown markers like "**Viewer Profile:**".
            return None;
        }

        let mut profile = first[label.end()..].trim_start_matches('*').trim().to_string();
        for line in &lines[1..] {
            if !profile.is_empty() {
                profile.push(' ');
            }
            profile.push_str(line);
        }

        let profile = profile.trim().to_string();
        (!profile.is_empty()).then_some(profile)
    }

    fn extract_movie(&self, lines: &[&str]) -> Option<Movie> {
        let title_line = lines
            .iter()
            .copied()
            .find(|line| self.title_prefix.is_match(line));

        let title = title_line
            .map(|line| {
                self.title_prefix
                    .replace(line, "")
                    .replace(['"'], "")
                    .replace("**", "")
                    .trim()
                    .to_string()
            })
            .unwrap_or_default();

        let description = match lines
            .iter()
            .find_map(|line| self.description_label.find(line).map(|m| &line[m.end()..]))
        {
            Some(rest) => rest.trim().to_string(),
            None => self.longest_free_line(lines, title_line),
        };

        let match_score = lines
            .iter()
            .find(|line| self.score_label.is_match(line))
            .and_then(|line| self.number.find(line))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_MATCH_SCORE);

        if title.is_empty() || description.is_empty() {
            return None;
        }

        Some(Movie {
            title,
            description,
            match_score,
        })
    }

    /// Fallback when no `Description:` line exists: the longest line that
    /// is neither the title nor the score line.
    fn longest_free_line(&self, lines: &[&str], title_line: Option<&str>) -> String {
        lines
            .iter()
            .copied()
            .filter(|line| Some(*line) != title_line)
            .filter(|line| !self.score_label.is_match(line))
            .max_by_key(|line| line.len())
            .unwrap_or_default()
            .to_string()
    }
}

impl Default for ReplyParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(reply: &str) -> ParsedReply {
        ReplyParser::new().parse(reply)
    }

    #[test]
    fn parses_a_well_formed_reply() {
        let reply = "1. Inception\n\
                     Description: A mind-bending sci-fi masterpiece about dreams.\n\
                     Match Score: 95\n\
                     \n\
                     2. The Matrix\n\
                     Description: Revolutionary sci-fi action film.\n\
                     Match Score: 90\n\
                     \n\
                     3. Interstellar\n\
                     Description: Epic space adventure with emotional depth.\n\
                     Match Score: 85";

        let parsed = parse(reply);

        assert_eq!(parsed.movies.len(), 3);
        assert_eq!(
            parsed.movies[0],
            Movie {
                title: "Inception".to_string(),
                description: "A mind-bending sci-fi masterpiece about dreams.".to_string(),
                match_score: 95,
            }
        );
        assert_eq!(parsed.movies[2].match_score, 85);
        assert!(parsed.viewer_profile.is_none());
    }

    #[test]
    fn extracts_the_viewer_profile_paragraph() {
        let reply = "Viewer Profile: You gravitate toward cerebral thrillers.\n\
                     Stories that reward close attention suit you best.\n\
                     \n\
                     1. Memento\n\
                     Description: A backwards-told puzzle of memory and revenge.\n\
                     Match Score: 96";

        let parsed = parse(reply);

        assert_eq!(
            parsed.viewer_profile.as_deref(),
            Some(
                "You gravitate toward cerebral thrillers. \
                 Stories that reward close attention suit you best."
            )
        );
        assert_eq!(parsed.movies.len(), 1);
        assert_eq!(parsed.movies[0].title, "Memento");
    }

    #[test]
    fn missing_score_defaults_to_85() {
        let reply = "1. Arrival\n\
                     Description: Language, time and first contact.";

        let parsed = parse(reply);

        assert_eq!(parsed.movies.len(), 1);
        assert_eq!(parsed.movies[0].match_score, DEFAULT_MATCH_SCORE);
    }

    #[test]
    fn strips_quotes_and_bold_markers_from_titles() {
        let reply = "1. **\"Blade Runner\"**\n\
                     Description: Neon-soaked questions about what makes us human.\n\
                     Match Score: 92";

        let parsed = parse(reply);

        assert_eq!(parsed.movies[0].title, "Blade Runner");
    }

    #[test]
    fn falls_back_to_the_longest_free_line_as_description() {
        let reply = "1. Heat\n\
                     A sprawling Los Angeles crime saga where obsession mirrors obsession.\n\
                     Match Score: 88";

        let parsed = parse(reply);

        assert_eq!(parsed.movies.len(), 1);
        assert_eq!(
            parsed.movies[0].description,
            "A sprawling Los Angeles crime saga where obsession mirrors obsession."
        );
        assert_eq!(parsed.movies[0].match_score, 88);
    }

    #[test]
    fn case_insensitive_labels_are_accepted() {
        let reply = "2. Parasite\n\
                     DESCRIPTION: A razor-sharp class satire.\n\
                     match score: 97";

        let parsed = parse(reply);

        assert_eq!(parsed.movies[0].description, "A razor-sharp class satire.");
        assert_eq!(parsed.movies[0].match_score, 97);
    }

    #[test]
    fn blocks_without_a_title_line_yield_nothing() {
        let reply = "Here are some movies you might enjoy!\n\
                     \n\
                     I hope these suggestions help.";

        let parsed = parse(reply);

        assert!(parsed.movies.is_empty());
        assert!(parsed.viewer_profile.is_none());
    }

    #[test]
    fn garbage_input_yields_an_empty_result() {
        assert_eq!(parse(""), ParsedReply::default());
        assert!(parse("I cannot help with that request.").movies.is_empty());
    }
}
