//! AFINN-style lexicon scorer for headline sentiment.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Word weights in `[-5, 5]`.
///
/// Keys are lowercase single tokens. The score of a text is the plain sum of
/// the weights of its tokens; it is not normalized or clamped.
pub(crate) const LEXICON: &[(&str, i32)] = &[
    // Positive signals
    ("accept", 1),
    ("accepted", 1),
    ("achieve", 2),
    ("achievement", 3),
    ("acquitted", 2),
    ("admire", 3),
    ("agree", 1),
    ("agreement", 1),
    ("aid", 1),
    ("amazing", 4),
    ("applaud", 2),
    ("approve", 2),
    ("approved", 2),
    ("approves", 2),
    ("award", 3),
    ("awarded", 3),
    ("awards", 3),
    ("backed", 1),
    ("best", 3),
    ("better", 2),
    ("bless", 2),
    ("boost", 1),
    ("boosts", 1),
    ("brave", 2),
    ("breakthrough", 3),
    ("bright", 1),
    ("brilliant", 4),
    ("calm", 2),
    ("care", 2),
    ("celebrate", 3),
    ("celebrates", 3),
    ("celebration", 3),
    ("champion", 2),
    ("champions", 2),
    ("charity", 2),
    ("cheer", 2),
    ("clean", 2),
    ("comfort", 2),
    ("confident", 2),
    ("cure", 2),
    ("delight", 3),
    ("donate", 2),
    ("donation", 2),
    ("ease", 2),
    ("eases", 2),
    ("encourage", 2),
    ("excellent", 3),
    ("excited", 3),
    ("fair", 2),
    ("fame", 1),
    ("famous", 2),
    ("fantastic", 4),
    ("favor", 2),
    ("fine", 2),
    ("free", 1),
    ("freedom", 2),
    ("friendly", 2),
    ("fun", 4),
    ("gain", 2),
    ("gains", 2),
    ("generous", 2),
    ("gift", 2),
    ("glad", 3),
    ("gold", 2),
    ("good", 3),
    ("grant", 1),
    ("great", 3),
    ("growth", 2),
    ("happy", 3),
    ("heal", 2),
    ("healthy", 2),
    ("help", 2),
    ("helps", 2),
    ("hero", 2),
    ("heroes", 2),
    ("honor", 2),
    ("honour", 2),
    ("hope", 2),
    ("hopes", 2),
    ("improve", 2),
    ("improved", 2),
    ("improves", 2),
    ("innovation", 1),
    ("inspire", 2),
    ("inspiring", 3),
    ("joy", 3),
    ("justice", 2),
    ("kind", 2),
    ("laugh", 1),
    ("launch", 1),
    ("launches", 1),
    ("lead", 1),
    ("like", 2),
    ("love", 3),
    ("lucky", 3),
    ("optimism", 2),
    ("optimistic", 2),
    ("peace", 2),
    ("perfect", 3),
    ("pleased", 3),
    ("popular", 3),
    ("praise", 3),
    ("praised", 3),
    ("progress", 2),
    ("promise", 1),
    ("prosper", 2),
    ("protect", 1),
    ("proud", 2),
    ("recover", 2),
    ("recovery", 2),
    ("relief", 1),
    ("rescue", 2),
    ("rescued", 2),
    ("reward", 2),
    ("safe", 1),
    ("safety", 1),
    ("save", 2),
    ("saved", 2),
    ("secure", 2),
    ("smile", 2),
    ("strong", 2),
    ("stronger", 2),
    ("success", 2),
    ("successful", 3),
    ("support", 2),
    ("supports", 2),
    ("surge", 1),
    ("survive", 2),
    ("survivor", 2),
    ("thank", 2),
    ("thanks", 2),
    ("thrilled", 5),
    ("top", 2),
    ("triumph", 4),
    ("trust", 1),
    ("unite", 1),
    ("united", 1),
    ("victory", 3),
    ("vindicated", 2),
    ("welcome", 2),
    ("welcomes", 2),
    ("win", 4),
    ("winner", 4),
    ("wins", 4),
    ("won", 3),
    ("wonderful", 4),
    // Negative signals
    ("abandon", -2),
    ("abandoned", -2),
    ("abuse", -3),
    ("accident", -2),
    ("accused", -2),
    ("afraid", -2),
    ("alarm", -2),
    ("anger", -3),
    ("angry", -3),
    ("arrest", -2),
    ("arrested", -3),
    ("assault", -2),
    ("attack", -1),
    ("attacks", -1),
    ("bad", -3),
    ("ban", -2),
    ("banned", -2),
    ("bankrupt", -3),
    ("battle", -1),
    ("blame", -2),
    ("blast", -2),
    ("bomb", -1),
    ("broken", -1),
    ("bushfire", -2),
    ("catastrophe", -3),
    ("chaos", -2),
    ("charged", -3),
    ("cheat", -3),
    ("clash", -2),
    ("collapse", -2),
    ("collapses", -2),
    ("concern", -2),
    ("concerns", -2),
    ("condemn", -2),
    ("conflict", -2),
    ("corruption", -3),
    ("crash", -2),
    ("crime", -3),
    ("crisis", -3),
    ("critical", -2),
    ("criticism", -2),
    ("criticised", -2),
    ("cruel", -3),
    ("cut", -1),
    ("cuts", -1),
    ("damage", -3),
    ("danger", -2),
    ("dangerous", -2),
    ("dead", -3),
    ("death", -2),
    ("deaths", -2),
    ("debt", -2),
    ("defeat", -2),
    ("delay", -1),
    ("delayed", -1),
    ("deny", -1),
    ("destroy", -3),
    ("destroyed", -3),
    ("dies", -3),
    ("disaster", -2),
    ("dispute", -2),
    ("doubt", -1),
    ("drop", -1),
    ("drought", -2),
    ("drown", -2),
    ("emergency", -2),
    ("evil", -3),
    ("fail", -2),
    ("failed", -2),
    ("fails", -2),
    ("failure", -2),
    ("fatal", -3),
    ("fear", -2),
    ("fears", -2),
    ("fight", -1),
    ("fire", -2),
    ("flood", -2),
    ("floods", -2),
    ("fraud", -4),
    ("grief", -2),
    ("guilty", -3),
    ("harm", -2),
    ("hate", -3),
    ("hit", -2),
    ("hurt", -2),
    ("illegal", -3),
    ("injured", -2),
    ("injury", -2),
    ("jail", -2),
    ("jailed", -2),
    ("kill", -3),
    ("killed", -3),
    ("killing", -3),
    ("lawsuit", -2),
    ("lose", -3),
    ("loses", -3),
    ("loss", -3),
    ("losses", -3),
    ("lost", -3),
    ("murder", -2),
    ("outrage", -3),
    ("pain", -2),
    ("panic", -3),
    ("poor", -2),
    ("prison", -2),
    ("problem", -2),
    ("problems", -2),
    ("protest", -2),
    ("protests", -2),
    ("recall", -2),
    ("recession", -2),
    ("reject", -1),
    ("rejected", -1),
    ("rejects", -1),
    ("riot", -2),
    ("risk", -2),
    ("sad", -2),
    ("scandal", -3),
    ("scare", -2),
    ("shock", -2),
    ("shortage", -2),
    ("sick", -2),
    ("slump", -2),
    ("strike", -1),
    ("struggle", -2),
    ("sue", -2),
    ("sued", -2),
    ("suffer", -2),
    ("suicide", -2),
    ("terror", -3),
    ("terrible", -3),
    ("threat", -2),
    ("threaten", -2),
    ("threatens", -2),
    ("toxic", -3),
    ("tragedy", -2),
    ("tragic", -2),
    ("trouble", -2),
    ("unemployment", -2),
    ("victim", -3),
    ("violence", -3),
    ("war", -2),
    ("warn", -2),
    ("warns", -2),
    ("warning", -3),
    ("weak", -2),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

/// Tokens that flip the sign of the token directly after them.
const NEGATORS: &[&str] = &[
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "isnt", "isn't", "not", "non",
    "wont", "won't", "never", "no",
];

/// Characters treated as token separators in addition to whitespace.
const SEPARATORS: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`',
    '"', '~', '(', ')', '[', ']',
];

static WEIGHTS: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| LEXICON.iter().copied().collect());

/// Whether `token` (already lowercase) carries a lexicon weight.
pub(crate) fn is_sentiment_word(token: &str) -> bool {
    WEIGHTS.contains_key(token)
}

/// Lowercase `text` and split it into lexicon tokens.
///
/// Apostrophes and hyphens stay inside tokens so contractions such as
/// `don't` survive intact.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Score a text string using the lexicon.
///
/// Sums the weight of every known token. A token directly preceded by a
/// negator contributes its weight with the sign flipped. Returns `0` for
/// empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> i32 {
    let tokens = tokenize(text);
    let mut score = 0_i32;
    for (i, token) in tokens.iter().enumerate() {
        let Some(&weight) = WEIGHTS.get(token.as_str()) else {
            continue;
        };
        let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
        score = score.saturating_add(if negated { -weight } else { weight });
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(lexicon_score("   "), 0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("council considers new parking meters"), 0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        assert_eq!(lexicon_score("local team wins grand final"), 4);
    }

    #[test]
    fn negative_keyword_returns_negative() {
        assert_eq!(lexicon_score("Acme faces lawsuit"), -2);
    }

    #[test]
    fn weights_are_summed_without_clamping() {
        // great (+3) + victory (+3) + celebrate (+3)
        assert_eq!(lexicon_score("great victory fans celebrate"), 9);
    }

    #[test]
    fn mixed_text_can_cancel_to_zero() {
        // win (+4) + loss (-3) + delay (-1)
        assert_eq!(lexicon_score("win follows loss after delay"), 0);
    }

    #[test]
    fn negator_flips_following_token() {
        assert_eq!(lexicon_score("not good"), -3);
        assert_eq!(lexicon_score("minister says plan isn't safe"), -1);
    }

    #[test]
    fn negator_only_reaches_next_token() {
        // "not" precedes "very", so "good" keeps its sign.
        assert_eq!(lexicon_score("not very good"), 3);
    }

    #[test]
    fn curly_apostrophe_negator_is_recognized() {
        // fear (-2) negated to +2, riot (-2)
        assert_eq!(lexicon_score("police don\u{2019}t fear riot"), 0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        assert_eq!(lexicon_score("Great!"), 3);
        assert_eq!(lexicon_score("(disaster)"), -2);
    }

    #[test]
    fn scoring_is_case_insensitive() {
        assert_eq!(lexicon_score("FLOODS"), lexicon_score("floods"));
    }

    #[test]
    fn tokenize_keeps_contractions_and_hyphens() {
        assert_eq!(
            tokenize("Won't re-open, says PM."),
            vec!["won't", "re-open", "says", "pm"]
        );
    }

    #[test]
    fn lexicon_has_no_duplicate_keys() {
        assert_eq!(WEIGHTS.len(), LEXICON.len());
    }
}
