use crate::models::domain::AgeBand;

/// Builds the Hebrew generation prompt for one question set. The model is
/// told to answer with a bare JSON array only; everything else it emits is
/// handled by the repair pipeline.
pub fn question_prompt(count: usize, age_band: AgeBand) -> String {
    let audience = match age_band {
        AgeBand::Young => {
            "ילדים צעירים בגילאי 5-7. השתמש במילים פשוטות מאוד, שאלות קצרות על חיות, צבעים ודברים מחיי היומיום"
        }
        AgeBand::Middle => {
            "ילדים בגילאי 8-10. שאלות ידע כללי מגוונות: טבע, מדע בסיסי, גאוגרפיה וחגי ישראל"
        }
        AgeBand::Older => {
            "ילדים בגילאי 11-13. שאלות מאתגרות יותר: היסטוריה, מדע, גאוגרפיה עולמית ותרבות"
        }
    };

    format!(
        "צור {count} שאלות טריוויה בעברית עבור {audience}.\n\
         לכל שאלה ספק תשובה נכונה אחת ורמז קצר שעוזר בלי לגלות את התשובה.\n\
         החזר אך ורק מערך JSON תקין, ללא טקסט נוסף וללא סימוני markdown, בפורמט הבא:\n\
         [{{\"question\": \"...\", \"answer\": \"...\", \"hint\": \"...\"}}]"
    )
}
