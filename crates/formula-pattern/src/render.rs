use crate::token::PatternToken;

/// Render a token tree back into the literal template text it denotes.
///
/// Pure visitor: tokens contribute in strict visitation order with no
/// reordering, deduplication, or whitespace normalization. Escapes re-emit
/// the escape marker (`\` + char); quoted text contributes its inner
/// characters verbatim, with the quote delimiters stripped and no
/// re-escaping. The renderer never consumes or validates input text.
pub fn render_pattern(tokens: &[PatternToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            PatternToken::Digit { required: true } => out.push('0'),
            PatternToken::Digit { required: false } => out.push('#'),
            PatternToken::GroupSeparator => out.push(','),
            PatternToken::DecimalPoint => out.push('.'),
            PatternToken::Literal(text) => out.push_str(text),
            PatternToken::QuotedText(text) => out.push_str(text),
            PatternToken::Escaped(ch) => {
                out.push('\\');
                out.push(*ch);
            }
            PatternToken::DateTime(field) => {
                for _ in 0..field.width {
                    out.push(field.kind.code_char());
                }
            }
            PatternToken::Whitespace => out.push(' '),
        }
    }
    out
}
