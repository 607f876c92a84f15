// Prompt Assembly
// Builds natural-language instruction payloads for the completion provider

use crate::models::{
    CitationStyle, HumanizeRequest, ParaphrasingLevel, ScoreCriteria, SentenceStructure,
    SummaryFormat, SummaryLength, VocabularyLevel,
};

/// System prompt for the humanize rewrite, assembled from the option bundle.
pub fn humanize_system_prompt(request: &HumanizeRequest) -> String {
    let mut prompt = format!(
        "You are an expert at making AI-generated text sound more human-like and natural. \
Your goal is to transform the following text to sound like it was written by a human.\n\n\
For writing style, use a {} tone.\n\
For emotional tone, make the text sound {}.\n\
Use {} English spelling and vocabulary conventions.\n",
        request.style.as_str(),
        request.emotion.as_str(),
        request.english_variant.as_str(),
    );

    prompt.push_str(paraphrasing_clause(request.paraphrasing_level));
    prompt.push_str(sentence_clause(request.sentence_structure));
    prompt.push_str(vocabulary_clause(request.vocabulary_level));
    prompt.push('\n');

    if request.bypass_ai_detection {
        prompt.push_str(
            "Importantly, modify the text to bypass AI detection tools by introducing natural \
human-like patterns, subtle imperfections, and varying sentence structures.\n",
        );
    }
    if request.improve_grammar {
        prompt.push_str(
            "Improve grammar and readability while maintaining a natural human voice.\n",
        );
    }
    if request.preserve_key_points {
        prompt.push_str("Preserve all key points and arguments from the original text.\n");
    }

    prompt.push_str(
        "\nFollow these specific guidelines to make the text more human-like:\n\
1. Vary sentence lengths and structures\n\
2. Use more transitional phrases and personal pronouns\n\
3. Include occasional informal language elements where appropriate\n\
4. Add natural thought progression markers like \"however,\" \"actually,\" or \"I think\"\n\
5. Incorporate rhetorical questions occasionally\n\
6. Introduce minor grammatical nuances that humans typically make\n\
7. Replace complex words with simpler alternatives when possible\n\
8. Add occasional hedging language like \"probably,\" \"seems like,\" \"I believe\"\n\
9. Restructure ideas in a more human-like flow of thought\n\
10. Insert occasional parenthetical asides or brief digressions\n\n\
Analyze the content and rewrite it while maintaining the core message and intent.",
    );

    prompt
}

fn paraphrasing_clause(level: ParaphrasingLevel) -> &'static str {
    match level {
        ParaphrasingLevel::Minimal => {
            "Apply minimal paraphrasing: keep the original wording wherever possible.\n"
        }
        ParaphrasingLevel::Moderate => {
            "Apply moderate paraphrasing: reword sentences while keeping their shape.\n"
        }
        ParaphrasingLevel::Extensive => {
            "Apply extensive paraphrasing: freely restructure and reword the entire text.\n"
        }
    }
}

fn sentence_clause(structure: SentenceStructure) -> &'static str {
    match structure {
        SentenceStructure::Simple => "Prefer short, simple sentences.\n",
        SentenceStructure::Varied => "Mix short and long sentences for a natural rhythm.\n",
        SentenceStructure::Complex => {
            "Favor longer sentences with subordinate clauses where they read naturally.\n"
        }
    }
}

fn vocabulary_clause(level: VocabularyLevel) -> &'static str {
    match level {
        VocabularyLevel::Basic => "Use everyday vocabulary an average reader knows.\n",
        VocabularyLevel::Intermediate => {
            "Use an intermediate vocabulary, neither simplistic nor ornate.\n"
        }
        VocabularyLevel::Advanced => {
            "Use a sophisticated vocabulary where it fits the register.\n"
        }
    }
}

/// System prompt for the summarize tool.
pub fn summarize_system_prompt(format: SummaryFormat, length: SummaryLength) -> String {
    format!(
        "You are an expert summarizer. Produce a {} summary of the user's text, \
formatted as {}. Reply with the summary only, no preamble.",
        length.as_str(),
        format.as_str(),
    )
}

/// System prompt for the scoring tool. The reply must be a JSON object.
pub fn score_system_prompt(criteria: ScoreCriteria) -> String {
    format!(
        "You are a strict writing evaluator. Score the user's text on its {} quality \
from 0 to 100 and give one or two sentences of feedback. Reply with a JSON object \
of the form {{\"score\": <number>, \"feedback\": \"<text>\"}} and nothing else.",
        criteria.as_str(),
    )
}

/// System prompt for the citation-style conversion tool.
pub fn citations_system_prompt(from_style: CitationStyle, to_style: CitationStyle) -> String {
    format!(
        "You are an expert in academic citation formats. Convert every citation in the \
user's text from {} style to {} style. Leave all other text unchanged and reply with \
the full converted text only.",
        from_style.as_str(),
        to_style.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CompletionModel, EmotionalTone, EnglishVariant, WritingStyle,
    };

    fn request() -> HumanizeRequest {
        HumanizeRequest {
            text: "sample".to_string(),
            style: WritingStyle::Academic,
            emotion: EmotionalTone::Critical,
            paraphrasing_level: ParaphrasingLevel::Extensive,
            sentence_structure: SentenceStructure::Complex,
            vocabulary_level: VocabularyLevel::Advanced,
            english_variant: EnglishVariant::British,
            model: CompletionModel::DeepseekChat,
            bypass_ai_detection: true,
            improve_grammar: false,
            preserve_key_points: true,
        }
    }

    #[test]
    fn test_prompt_reflects_options() {
        let prompt = humanize_system_prompt(&request());
        assert!(prompt.contains("use a academic tone"));
        assert!(prompt.contains("sound critical"));
        assert!(prompt.contains("British English"));
        assert!(prompt.contains("extensive paraphrasing"));
        assert!(prompt.contains("subordinate clauses"));
        assert!(prompt.contains("sophisticated vocabulary"));
    }

    #[test]
    fn test_boolean_intents_toggle_clauses() {
        let mut req = request();
        let with_all = humanize_system_prompt(&req);
        assert!(with_all.contains("bypass AI detection"));
        assert!(!with_all.contains("Improve grammar"));
        assert!(with_all.contains("Preserve all key points"));

        req.bypass_ai_detection = false;
        req.improve_grammar = true;
        req.preserve_key_points = false;
        let flipped = humanize_system_prompt(&req);
        assert!(!flipped.contains("bypass AI detection"));
        assert!(flipped.contains("Improve grammar"));
        assert!(!flipped.contains("Preserve all key points"));
    }

    #[test]
    fn test_score_prompt_demands_json() {
        let prompt = score_system_prompt(ScoreCriteria::Coherence);
        assert!(prompt.contains("coherence"));
        assert!(prompt.contains("\"score\""));
        assert!(prompt.contains("\"feedback\""));
    }

    #[test]
    fn test_citation_prompt_names_both_styles() {
        let prompt = citations_system_prompt(CitationStyle::Apa, CitationStyle::Mla);
        assert!(prompt.contains("from APA style to MLA style"));
    }
}
