use once_cell::sync::Lazy;

use crate::models::domain::{AgeBand, TriviaQuestion};

fn q(question: &str, answer: &str, hint: &str) -> TriviaQuestion {
    TriviaQuestion::new(question, answer, hint)
}

static YOUNG_BANK: Lazy<Vec<TriviaQuestion>> = Lazy::new(|| {
    vec![
        q("מה הצבע של השמש?", "צהוב", "רואים אותה ביום בשמיים"),
        q("כמה רגליים יש לכלב?", "ארבע", "יותר משתיים"),
        q("איזה קול עושה החתול?", "מיאו", "חיית מחמד עם שפם"),
        q("מה שותים מהפרה?", "חלב", "משקה לבן"),
        q("כמה ימים יש בשבוע?", "שבעה", "מספר בין שש לשמונה"),
        q("איזו חיה היא הכי גבוהה בעולם?", "ג'ירפה", "יש לה צוואר ארוך מאוד"),
        q("מה הצבע של העלים על העצים?", "ירוק", "כמו צבע הדשא"),
        q("איפה גרים הדגים?", "במים", "לא על היבשה"),
        q("עם מה מצחצחים שיניים?", "מברשת שיניים", "בבוקר ובערב"),
        q("איזו חיה אוהבת לאכול גזר?", "ארנב", "יש לה אוזניים ארוכות"),
        q("מה יורד מהשמיים בחורף?", "גשם", "טיפות מים"),
        q("כמה אצבעות יש ביד אחת?", "חמש", "אפשר לספור על היד"),
    ]
});

static MIDDLE_BANK: Lazy<Vec<TriviaQuestion>> = Lazy::new(|| {
    vec![
        q("מהי עיר הבירה של ישראל?", "ירושלים", "עיר עתיקה בהרים"),
        q("כמה יבשות יש בעולם?", "שבע", "כמו מספר ימי השבוע"),
        q("מהו המקום הנמוך ביותר בעולם?", "ים המלח", "קל מאוד לצוף בו"),
        q(
            "איזה כוכב לכת הוא הקרוב ביותר לשמש?",
            "כוכב חמה",
            "נקרא גם מרקורי",
        ),
        q("מהי החיה הגדולה ביותר בעולם?", "הלווייתן הכחול", "חיה בים"),
        q(
            "כמה שחקנים יש בקבוצת כדורגל על המגרש?",
            "אחד עשר",
            "יותר מעשרה",
        ),
        q("מאיזה פרי מכינים צימוקים?", "ענבים", "פרי שגדל באשכולות"),
        q("איזה איבר שואב את הדם בגוף?", "הלב", "פועם בתוך החזה"),
        q("באיזה חג מדליקים נרות שמונה ימים?", "חנוכה", "חג האורים"),
        q("איזה ים נמצא ממערב לישראל?", "הים התיכון", "שוחים בו בקיץ"),
        q("כמה צלעות יש למשולש?", "שלוש", "אחת פחות מריבוע"),
        q("מאיזה צמח מגיע הדבש?", "מפרחים", "הדבורים אוספות ממנו צוף"),
        q("איך קוראים לבית של הדבורים?", "כוורת", "שם מכינים דבש"),
    ]
});

static OLDER_BANK: Lazy<Vec<TriviaQuestion>> = Lazy::new(|| {
    vec![
        q(
            "מי היה ראש הממשלה הראשון של ישראל?",
            "דוד בן-גוריון",
            "הכריז על הקמת המדינה",
        ),
        q("מהו ההר הגבוה ביותר בעולם?", "אוורסט", "נמצא בהרי ההימלאיה"),
        q("באיזו שנה קמה מדינת ישראל?", "1948", "לפני יותר משבעים שנה"),
        q(
            "איזה יסוד כימי מסומן באות O?",
            "חמצן",
            "אנחנו נושמים אותו",
        ),
        q("מהו הנהר הארוך ביותר בעולם?", "הנילוס", "זורם במצרים"),
        q(
            "מי צייר את המונה ליזה?",
            "לאונרדו דה וינצ'י",
            "ממציא וצייר איטלקי",
        ),
        q("מהי בירת צרפת?", "פריז", "העיר של מגדל אייפל"),
        q("כמה עצמות יש בגוף של אדם בוגר?", "206", "קצת יותר ממאתיים"),
        q(
            "מהו כוכב הלכת הגדול ביותר במערכת השמש?",
            "צדק",
            "יש עליו כתם אדום ענק",
        ),
        q(
            "מי כתב את מילות \"התקווה\"?",
            "נפתלי הרץ אימבר",
            "ההמנון הלאומי שלנו",
        ),
        q(
            "מהי המדינה הגדולה ביותר בעולם בשטחה?",
            "רוסיה",
            "משתרעת על שתי יבשות",
        ),
        q(
            "איזה גז קולטים הצמחים מהאוויר?",
            "פחמן דו-חמצני",
            "חלק מתהליך הפוטוסינתזה",
        ),
        q(
            "מהו האוקיינוס הגדול ביותר בעולם?",
            "האוקיינוס השקט",
            "נמצא בין אסיה לאמריקה",
        ),
    ]
});

pub fn bank_for(age_band: AgeBand) -> &'static [TriviaQuestion] {
    match age_band {
        AgeBand::Young => &YOUNG_BANK,
        AgeBand::Middle => &MIDDLE_BANK,
        AgeBand::Older => &OLDER_BANK,
    }
}

/// Shown when every fallback tier is exhausted, instead of failing.
pub fn placeholder_question() -> TriviaQuestion {
    q(
        "איך קוראים למדינה שלנו?",
        "ישראל",
        "אנחנו גרים בה",
    )
}
