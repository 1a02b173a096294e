//! Per-language template tables.
//!
//! `{title}` and `{subsection}` are replaced when a template is filled.

use crate::model::SectionKind;
use crate::spec::Language;

/// Labels printed on the cover page.
#[derive(Debug, Clone, Copy)]
pub struct CoverLabels {
    /// Participant names
    pub participants: &'static str,
    /// Supervising professor
    pub professor: &'static str,
    /// University
    pub university: &'static str,
    /// College
    pub college: &'static str,
    /// Department
    pub department: &'static str,
    /// Academic year
    pub year: &'static str,
}

/// One level 1 body section and its level 2 subsections.
#[derive(Debug, Clone, Copy)]
pub struct BodyTemplate {
    /// Section kind
    pub kind: SectionKind,
    /// Heading text
    pub heading: &'static str,
    /// Lead paragraph under the heading
    pub lead: &'static str,
    /// Subsection headings
    pub subsections: [&'static str; 3],
}

/// All wording for one language.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSet {
    /// Language of the set
    pub language: Language,
    /// Lowercase the title when it appears inside prose
    pub lowercase_in_prose: bool,
    /// Cover labels
    pub cover: CoverLabels,
    /// Table of contents title
    pub contents_title: &'static str,
    /// References heading
    pub references_heading: &'static str,
    /// Introduction heading
    pub introduction_heading: &'static str,
    /// Introduction paragraphs
    pub introduction: &'static [&'static str],
    /// Body sections in report order
    pub body: [BodyTemplate; 4],
    /// Paragraphs written under every subsection
    pub subsection_paragraphs: [&'static str; 2],
    /// Bullets written under every subsection
    pub subsection_bullets: [&'static str; 5],
    /// Conclusion heading
    pub conclusion_heading: &'static str,
    /// Conclusion paragraphs
    pub conclusion: &'static [&'static str],
}

/// Template set for a language.
pub fn templates(language: Language) -> &'static TemplateSet {
    match language {
        Language::En => &ENGLISH,
        Language::Ar => &ARABIC,
    }
}

static ENGLISH: TemplateSet = TemplateSet {
    language: Language::En,
    lowercase_in_prose: true,
    cover: CoverLabels {
        participants: "Student Name(s)",
        professor: "Professor",
        university: "University",
        college: "College",
        department: "Department",
        year: "Academic Year",
    },
    contents_title: "Table of Contents",
    references_heading: "References",
    introduction_heading: "Introduction",
    introduction: &[
        "The study of {title} has become an important area of academic inquiry and has attracted growing attention in recent years. This report offers a detailed analysis of the current state of research, the methods in use and the main findings in the field.",
        "Understanding {title} matters because it informs both fundamental principles and practical applications. Through systematic investigation, researchers have developed a range of approaches to the challenges and opportunities the field presents.",
        "The report opens with a review of the existing literature and the theoretical frameworks behind it. It then turns to the methods commonly used in this area of study, followed by an analysis of current results and their implications.",
        "Its objective is to bring current knowledge together, to identify gaps in the literature and to suggest directions for future research. By weighing several perspectives, it aims to contribute to the ongoing scholarly conversation in this field.",
    ],
    body: [
        BodyTemplate {
            kind: SectionKind::LiteratureReview,
            heading: "Literature Review",
            lead: "This chapter surveys the published work on {title} and the ideas that shape it.",
            subsections: [
                "Current Research Trends",
                "Theoretical Frameworks",
                "Methodological Approaches",
            ],
        },
        BodyTemplate {
            kind: SectionKind::Methodology,
            heading: "Methodology",
            lead: "This chapter describes how the questions raised by {title} were investigated.",
            subsections: [
                "Research Design",
                "Data Collection Methods",
                "Analysis Techniques",
            ],
        },
        BodyTemplate {
            kind: SectionKind::Results,
            heading: "Results and Analysis",
            lead: "This chapter presents the main results on {title} and analyses them in turn.",
            subsections: [
                "Key Findings",
                "Statistical Analysis",
                "Interpretation of Results",
            ],
        },
        BodyTemplate {
            kind: SectionKind::Discussion,
            heading: "Discussion",
            lead: "This chapter places the results on {title} in a wider context.",
            subsections: [
                "Implications of Findings",
                "Comparison with Previous Studies",
                "Limitations and Future Directions",
            ],
        },
    ],
    subsection_paragraphs: [
        "This part examines {subsection} in the context of {title}. The analysis brings out several considerations that deserve close attention.",
        "Research in this area has made notable progress over recent years, and several recurring themes stand out.",
    ],
    subsection_bullets: [
        "Thorough analysis of {subsection} methods",
        "Integration of theoretical frameworks with practical applications",
        "Evidence-based approaches to understanding {subsection}",
        "Critical evaluation of established research paradigms",
        "New solutions to current challenges",
    ],
    conclusion_heading: "Conclusion",
    conclusion: &[
        "This report has examined the many sides of {title}, offering insight into current research trends, methodological approaches and key findings in the field.",
        "The analysis shows how complex and significant {title} is as an area of academic inquiry. A systematic reading of the literature, the methodological frameworks and the empirical evidence leads to several conclusions.",
        "First, the field has matured considerably, and researchers now use increasingly refined approaches to fundamental questions and practical problems. Combining theory with empirical work has produced a fuller understanding of the underlying principles.",
        "Second, the variety of methods in current research reflects the interdisciplinary character of the field. That variety supplies several complementary perspectives and leaves room for methodological innovation.",
        "Finally, the findings discussed here add to the scholarly conversation and give a basis for future work. The gaps and limitations identified along the way offer practical guidance to researchers who wish to advance the field.",
        "In closing, {title} remains a dynamic field with considerable room to grow. Future research should build on the foundations laid by current scholarship while testing new approaches to emerging challenges.",
    ],
};

static ARABIC: TemplateSet = TemplateSet {
    language: Language::Ar,
    lowercase_in_prose: false,
    cover: CoverLabels {
        participants: "اسم الطالب/الطلاب",
        professor: "الأستاذ",
        university: "الجامعة",
        college: "الكلية",
        department: "القسم",
        year: "السنة الأكاديمية",
    },
    contents_title: "جدول المحتويات",
    references_heading: "المراجع",
    introduction_heading: "المقدمة",
    introduction: &[
        "أصبحت دراسة {title} مجالاً أكاديمياً مهماً يحظى باهتمام متزايد في السنوات الأخيرة. يقدم هذا التقرير تحليلاً مفصلاً للوضع الراهن للبحث وللمناهج المستخدمة وأبرز النتائج في هذا المجال.",
        "ترجع أهمية فهم {title} إلى إسهامه في المبادئ الأساسية وفي التطبيقات العملية معاً. ومن خلال البحث المنهجي طوّر الباحثون أساليب متنوعة للتعامل مع التحديات والفرص التي يطرحها هذا المجال.",
        "يبدأ التقرير بمراجعة الأدبيات المنشورة والأطر النظرية التي تستند إليها. ثم ينتقل إلى المناهج الشائعة في هذا المجال، يليها تحليل للنتائج الحالية وما يترتب عليها.",
        "يهدف التقرير إلى جمع المعرفة المتاحة وتحديد الثغرات في الأدبيات واقتراح اتجاهات للبحث المستقبلي. ومن خلال الموازنة بين وجهات نظر متعددة يسعى إلى الإسهام في النقاش العلمي القائم في هذا المجال.",
    ],
    body: [
        BodyTemplate {
            kind: SectionKind::LiteratureReview,
            heading: "مراجعة الأدبيات",
            lead: "يستعرض هذا الفصل الأعمال المنشورة حول {title} والأفكار التي تشكّلها.",
            subsections: ["اتجاهات البحث الحالية", "الأطر النظرية", "النهج المنهجية"],
        },
        BodyTemplate {
            kind: SectionKind::Methodology,
            heading: "المنهجية",
            lead: "يصف هذا الفصل كيفية دراسة الأسئلة التي يثيرها {title}.",
            subsections: ["تصميم البحث", "طرق جمع البيانات", "تقنيات التحليل"],
        },
        BodyTemplate {
            kind: SectionKind::Results,
            heading: "النتائج والتحليل",
            lead: "يعرض هذا الفصل أبرز النتائج المتعلقة بـ {title} ويحللها تباعاً.",
            subsections: ["النتائج الرئيسية", "التحليل الإحصائي", "تفسير النتائج"],
        },
        BodyTemplate {
            kind: SectionKind::Discussion,
            heading: "المناقشة",
            lead: "يضع هذا الفصل النتائج المتعلقة بـ {title} في سياق أوسع.",
            subsections: [
                "آثار النتائج",
                "المقارنة مع الدراسات السابقة",
                "القيود والاتجاهات المستقبلية",
            ],
        },
    ],
    subsection_paragraphs: [
        "يتناول هذا الجزء {subsection} في سياق {title}. ويكشف التحليل عن عدة اعتبارات تستحق الدراسة المتأنية.",
        "حققت البحوث في هذا المجال تقدماً ملحوظاً خلال السنوات الأخيرة، وتبرز فيها عدة محاور متكررة.",
    ],
    subsection_bullets: [
        "تحليل معمّق لمنهجيات {subsection}",
        "الربط بين الأطر النظرية والتطبيقات العملية",
        "مقاربات قائمة على الأدلة لفهم {subsection}",
        "تقييم نقدي لنماذج البحث السائدة",
        "حلول جديدة للتحديات الراهنة",
    ],
    conclusion_heading: "الخاتمة",
    conclusion: &[
        "تناول هذا التقرير الجوانب المتعددة لـ {title}، مقدماً رؤى حول اتجاهات البحث الحالية والنهج المنهجية والنتائج الرئيسية في هذا المجال.",
        "يُظهر التحليل مدى تعقيد {title} وأهميته بوصفه مجالاً للبحث الأكاديمي. وتقود القراءة المنهجية للأدبيات والأطر المنهجية والأدلة التجريبية إلى عدة استنتاجات.",
        "أولاً، شهد المجال نضجاً كبيراً، إذ يستخدم الباحثون اليوم أساليب متزايدة الدقة لمعالجة الأسئلة الأساسية والمشكلات العملية. وقد أسهم الجمع بين النظرية والعمل التجريبي في فهم أعمق للمبادئ الأساسية.",
        "ثانياً، يعكس تنوع المناهج في البحث الحالي الطابع متعدد التخصصات لهذا المجال. ويوفر هذا التنوع وجهات نظر متكاملة ويفتح المجال للابتكار المنهجي.",
        "أخيراً، تضيف النتائج المعروضة هنا إلى النقاش العلمي وتشكّل أساساً للأعمال المستقبلية. كما تقدم الثغرات والقيود التي حُددت إرشادات عملية للباحثين الراغبين في تطوير هذا المجال.",
        "وفي الختام، يظل {title} مجالاً حيوياً يتسع لمزيد من النمو. وينبغي أن يبني البحث المستقبلي على الأسس التي أرستها الدراسات الحالية مع اختبار أساليب جديدة للتحديات الناشئة.",
    ],
};
