//! Prompt templates for the movie curator.
//!
//! The reply format requested here (numbered title, `Description:` line,
//! `Match Score:` line) is what `parser` scrapes back out, so the two
//! modules have to stay in sync.

/// System prompt shared by every backend
pub const SYSTEM_PROMPT: &str = "You are an expert film curator with deep knowledge of cinema \
across all eras, genres, and styles. Your recommendations are thoughtful, diverse, and \
personally tailored to each viewer's preferences.";

/// Labels for the five quiz answers, in question order
const ANSWER_LABELS: [&str; 5] = [
    "Character Preference",
    "Viewing Atmosphere",
    "Key Film Element",
    "Preferred Era",
    "Desired Impact",
];

/// Builds the prompt for a fresh batch of recommendations
pub fn recommendations_prompt(
    answers: &[String],
    language: Option<&str>,
    watched_movies: &[String],
) -> String {
    let mut prompt = String::from(
        "As a cinematic AI curator, analyze these viewer preferences and recommend 3 perfect movies:\n\n",
    );

    push_answers(&mut prompt, answers);

    prompt.push_str(
        "\nFor each recommendation, consider:\n\
         - How it matches their character preference\n\
         - The emotional atmosphere it creates\n\
         - Its strongest cinematic elements\n\
         - The era and its significance\n\
         - The lasting impact it leaves\n\n\
         Start with a short viewer profile in this format:\n\
         Viewer Profile: [2-3 sentences describing their movie personality]\n\n\
         Then provide 3 highly personalized recommendations in this format:\n\
         1. Movie Title\n\
         Description: A compelling reason why this movie perfectly matches their preferences\n\
         Match Score: [85-100 based on fit]\n\n\
         Focus on creating a diverse selection that still maintains high relevance to their preferences.",
    );

    push_watched_movies(&mut prompt, watched_movies);
    push_language(&mut prompt, language);

    prompt
}

/// Builds the prompt for a single replacement recommendation
pub fn replacement_prompt(
    answers: &[String],
    watched_movie: &str,
    language: Option<&str>,
    watched_movies: &[String],
) -> String {
    let mut prompt = format!(
        "As a cinematic AI curator, analyze these viewer preferences and recommend 1 perfect movie \
         to replace \"{}\" that they've already watched:\n\n",
        watched_movie
    );

    push_answers(&mut prompt, answers);

    prompt.push_str(
        "\nProvide 1 highly personalized recommendation in this format:\n\
         1. Movie Title\n\
         Description: A compelling reason why this movie perfectly matches their preferences\n\
         Match Score: [85-100 based on fit]\n\n",
    );

    prompt.push_str(&format!(
        "Important: Do NOT recommend \"{}\" or any extremely similar movies.",
        watched_movie
    ));

    push_watched_movies(&mut prompt, watched_movies);
    push_language(&mut prompt, language);

    prompt
}

fn push_answers(prompt: &mut String, answers: &[String]) {
    for (i, (label, answer)) in ANSWER_LABELS.iter().zip(answers).enumerate() {
        prompt.push_str(&format!("{}. {}: {}\n", i + 1, label, answer));
    }
}

fn push_watched_movies(prompt: &mut String, watched_movies: &[String]) {
    if watched_movies.is_empty() {
        return;
    }

    prompt.push_str("\n\nThey have already watched these movies, do NOT recommend any of them:\n");
    for movie in watched_movies {
        prompt.push_str(&format!("- {}\n", movie));
    }
}

fn push_language(prompt: &mut String, language: Option<&str>) {
    let Some(language) = language else {
        return;
    };
    if language.trim().is_empty() || language.eq_ignore_ascii_case("english") {
        return;
    }

    prompt.push_str(&format!(
        "\n\nWrite the viewer profile and every description in {}. \
         Keep movie titles in their original language.",
        language
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Vec<String> {
        vec![
            "A witty character from a Comedy".to_string(),
            "Edge of my seat, heart racing".to_string(),
            "Plot twists and surprises".to_string(),
            "Innovation Period (1990s-2000s)".to_string(),
            "A mind-bending revelation".to_string(),
        ]
    }

    #[test]
    fn recommendations_prompt_labels_every_answer() {
        let prompt = recommendations_prompt(&answers(), None, &[]);

        assert!(prompt.contains("1. Character Preference: A witty character from a Comedy"));
        assert!(prompt.contains("5. Desired Impact: A mind-bending revelation"));
        assert!(prompt.contains("recommend 3 perfect movies"));
        assert!(prompt.contains("Viewer Profile:"));
        assert!(prompt.contains("Match Score: [85-100 based on fit]"));
    }

    #[test]
    fn recommendations_prompt_lists_watched_movies() {
        let watched = vec!["Inception".to_string(), "The Matrix".to_string()];
        let prompt = recommendations_prompt(&answers(), None, &watched);

        assert!(prompt.contains("do NOT recommend any of them"));
        assert!(prompt.contains("- Inception"));
        assert!(prompt.contains("- The Matrix"));
    }

    #[test]
    fn language_clause_is_skipped_for_english() {
        let prompt = recommendations_prompt(&answers(), Some("English"), &[]);
        assert!(!prompt.contains("Keep movie titles in their original language"));

        let prompt = recommendations_prompt(&answers(), Some("Spanish"), &[]);
        assert!(prompt.contains("in Spanish"));
        assert!(prompt.contains("Keep movie titles in their original language"));
    }

    #[test]
    fn replacement_prompt_forbids_the_watched_movie() {
        let prompt = replacement_prompt(&answers(), "Inception", None, &[]);

        assert!(prompt.contains("recommend 1 perfect movie to replace \"Inception\""));
        assert!(prompt.contains("Do NOT recommend \"Inception\" or any extremely similar movies."));
    }
}
