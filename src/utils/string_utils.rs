//! # 문자열 유틸리티
//!
//! 화면 출력용 문자열 처리 함수들입니다.

/// HTML 특수문자 이스케이프
///
/// 사용자가 입력한 텍스트(시크릿 등)를 HTML 본문이나 속성값에 넣기 전에
/// 반드시 거쳐야 합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::escape_html;
///
/// assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
        assert_eq!(escape_html("비밀 <3"), "비밀 &lt;3");
    }
}
