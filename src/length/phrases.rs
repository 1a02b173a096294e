//! Phrase pools used when expanding or trimming prose.

use crate::spec::Language;

const ELABORATION_EN: &[&str] = &[
    "Furthermore, this aspect is particularly important because it demonstrates the significance of this topic",
    "Additionally, it should be noted that research in this area has shown considerable development",
    "Moreover, research indicates that these findings contribute to our understanding of the subject matter",
    "It is also worth mentioning that contemporary studies have revealed new insights",
    "In this context, it becomes clear that further investigation is warranted",
    "This observation leads us to understand that multiple perspectives must be considered",
    "Consequently, we can observe that the implications are far-reaching",
    "As a result of this analysis, several important conclusions can be drawn",
    "In addition, the available evidence suggests that practical applications continue to expand",
    "It is important to mention that scholars have approached this question from several directions",
    "Taken together, these observations strengthen the case for a systematic treatment of the topic",
    "Likewise, comparative studies point to recurring patterns that merit closer attention",
];

const ELABORATION_AR: &[&str] = &[
    "علاوة على ذلك، يكتسب هذا الجانب أهمية خاصة لأنه يوضح أهمية هذا الموضوع",
    "بالإضافة إلى ذلك، تجدر الإشارة إلى أن البحث في هذا المجال شهد تطوراً ملحوظاً",
    "كما تشير الأبحاث إلى أن هذه النتائج تسهم في فهمنا للموضوع المطروح",
    "ومن الجدير بالذكر أن الدراسات المعاصرة كشفت عن رؤى جديدة",
    "وفي هذا السياق، يتضح أن المزيد من البحث أمر ضروري",
    "وتقودنا هذه الملاحظة إلى إدراك ضرورة مراعاة وجهات نظر متعددة",
    "وبناءً على ذلك، يمكننا ملاحظة أن الآثار المترتبة بعيدة المدى",
    "ونتيجة لهذا التحليل، يمكن استخلاص عدة استنتاجات مهمة",
    "كذلك تشير الأدلة المتاحة إلى أن التطبيقات العملية في توسع مستمر",
    "ومن المهم الإشارة إلى أن الباحثين تناولوا هذه المسألة من زوايا متعددة",
    "وإجمالاً، تعزز هذه الملاحظات الحاجة إلى معالجة منهجية لهذا الموضوع",
    "وبالمثل، تشير الدراسات المقارنة إلى أنماط متكررة تستحق مزيداً من الاهتمام",
];

/// Connective phrases stripped when trimming, longest first.
///
/// Includes the elaboration sentences so expanded prose can be taken back.
const BOILERPLATE_EN: &[&str] = &[
    "furthermore, this aspect is particularly important because it demonstrates the significance of this topic",
    "additionally, it should be noted that research in this area has shown considerable development",
    "it is also worth mentioning that contemporary studies have revealed new insights",
    "in this context, it becomes clear that further investigation is warranted",
    "consequently, we can observe that the implications are far-reaching",
    "additionally, we should consider that",
    "furthermore, it is worth noting that",
    "it is important to mention that",
    "moreover, it can be said that",
    "it should be noted that",
    "as previously mentioned",
    "to put it simply",
    "in other words",
];

const BOILERPLATE_AR: &[&str] = &[
    "بالإضافة إلى ذلك، تجدر الإشارة إلى أن البحث في هذا المجال شهد تطوراً ملحوظاً",
    "علاوة على ذلك، يكتسب هذا الجانب أهمية خاصة لأنه يوضح أهمية هذا الموضوع",
    "ومن الجدير بالذكر أن الدراسات المعاصرة كشفت عن رؤى جديدة",
    "وفي هذا السياق، يتضح أن المزيد من البحث أمر ضروري",
    "ومن المهم الإشارة إلى أن",
    "تجدر الإشارة إلى أن",
    "كما ذكرنا سابقاً",
    "بعبارة أخرى",
];

/// Elaboration sentences appended round-robin when expanding.
pub fn elaboration_pool(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => ELABORATION_EN,
        Language::Ar => ELABORATION_AR,
    }
}

/// Boilerplate phrases removed when trimming.
pub fn boilerplate_phrases(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => BOILERPLATE_EN,
        Language::Ar => BOILERPLATE_AR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_defined_for_every_language() {
        for language in Language::ALL {
            assert!(!elaboration_pool(language).is_empty());
            assert!(!boilerplate_phrases(language).is_empty());
        }
    }

    #[test]
    fn test_boilerplate_sorted_longest_first() {
        for language in Language::ALL {
            let phrases = boilerplate_phrases(language);
            for pair in phrases.windows(2) {
                assert!(pair[0].chars().count() >= pair[1].chars().count());
            }
        }
    }
}
