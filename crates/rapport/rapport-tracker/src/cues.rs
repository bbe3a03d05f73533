//! Textual cue matching over the fixed tables: style inference and topic extraction.

use rapport_core::tables::{CASUAL_STYLE_MARKERS, FORMAL_STYLE_MARKERS, TOPIC_KEYWORDS};
use rapport_core::ConversationStyle;

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

/// Style implied by a single message. Politeness markers win over casual ones.
pub fn infer_style(text: &str) -> ConversationStyle {
    if contains_any(text, FORMAL_STYLE_MARKERS) {
        ConversationStyle::Formal
    } else if contains_any(text, CASUAL_STYLE_MARKERS) {
        ConversationStyle::Casual
    } else {
        ConversationStyle::Friendly
    }
}

/// Topic labels whose keywords occur in `text`, in table order.
pub fn extract_topics(text: &str) -> Vec<&'static str> {
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| contains_any(text, keywords))
        .map(|(topic, _)| *topic)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_from_markers() {
        assert_eq!(infer_style("실례지만 하나 여쭤봐도 될까요"), ConversationStyle::Formal);
        assert_eq!(infer_style("ㅋㅋ 그거 좋네요"), ConversationStyle::Casual);
        assert_eq!(infer_style("예약 가능한 시간 있나요?"), ConversationStyle::Friendly);
        // both present: formal wins
        assert_eq!(infer_style("죄송해요 ㅎㅎ"), ConversationStyle::Formal);
    }

    #[test]
    fn topics_in_table_order() {
        assert_eq!(extract_topics("피부 관리는 어떤 게 좋을까요?"), vec!["피부관리"]);
        assert_eq!(
            extract_topics("보톡스 시술 가격이랑 예약 시간 알려주세요"),
            vec!["시술", "예약", "가격"]
        );
        assert!(extract_topics("아우 질만 들었네").is_empty());
    }
}
