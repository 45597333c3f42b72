use crate::models::{BodyZone, Category};

/// Ordered first-match rule tables.
///
/// Both tables are evaluated top to bottom with substring containment
/// over the lower-cased indicator name; the first rule with any matching
/// keyword wins. Order is load-bearing where a keyword legitimately
/// belongs to several rules: 碱性磷酸酶 is a liver enzyme first and a bone
/// marker second, 糖化血红蛋白 must hit the glucose rule before the
/// blood-routine rule sees 血红蛋白. Latin keywords are lower-case because
/// the name is lower-cased before matching.

pub(super) const ZONE_RULES: &[(BodyZone, &[&str])] = &[
    (
        BodyZone::Liver,
        &[
            "转氨酶", "胆红素", "白蛋白", "球蛋白", "总蛋白", "碱性磷酸酶", "谷氨酰", "甲胎蛋白",
            "alt", "ast", "ggt",
        ],
    ),
    (
        BodyZone::Kidney,
        &["肌酐", "尿素", "尿酸", "胱抑素", "肾小球"],
    ),
    (
        BodyZone::Pancreas,
        &["血糖", "糖化", "葡萄糖", "胰岛素", "淀粉酶", "脂肪酶", "胰腺"],
    ),
    (
        BodyZone::Blood,
        &[
            "白细胞", "红细胞", "血红蛋白", "血色素", "血小板", "粒细胞", "淋巴细胞", "单核细胞",
            "压积", "比容", "网织",
        ],
    ),
    (
        BodyZone::Heart,
        &["肌钙蛋白", "肌酸激酶", "乳酸脱氢酶", "心肌", "脑钠肽"],
    ),
    (BodyZone::Thyroid, &["甲状腺", "tsh", "ft3", "ft4"]),
    (
        BodyZone::Vascular,
        &["胆固醇", "甘油三酯", "脂蛋白", "同型半胱氨酸"],
    ),
    (BodyZone::Gallbladder, &["胆汁酸", "胆囊"]),
    (BodyZone::Stomach, &["胃蛋白酶原", "幽门螺杆菌", "胃"]),
    (BodyZone::Intestine, &["便潜血", "肠"]),
    (BodyZone::Lung, &["肺活量", "肺"]),
    (
        BodyZone::Urinary,
        &["尿蛋白", "尿比重", "尿潜血", "尿胆原"],
    ),
    (
        BodyZone::Bone,
        &["骨密度", "骨钙素", "碱性磷酸酶", "维生素d", "钙"],
    ),
    (BodyZone::Immune, &["免疫球蛋白", "补体", "类风湿", "抗体"]),
    (
        BodyZone::Reproductive,
        &["前列腺", "雌二醇", "睾酮", "孕酮", "人绒毛膜"],
    ),
    (BodyZone::Eye, &["视力", "眼压"]),
    (BodyZone::Spleen, &["脾"]),
];

pub(super) const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::BloodGlucose,
        &["血糖", "糖化", "葡萄糖", "胰岛素"],
    ),
    (
        Category::BloodRoutine,
        &[
            "白细胞", "红细胞", "血红蛋白", "血色素", "血小板", "粒细胞", "淋巴细胞", "单核细胞",
            "压积", "比容", "网织",
        ],
    ),
    (
        Category::LiverFunction,
        &[
            "转氨酶", "胆红素", "白蛋白", "球蛋白", "总蛋白", "碱性磷酸酶", "谷氨酰", "胆汁酸",
        ],
    ),
    (
        Category::KidneyFunction,
        &["肌酐", "尿素", "尿酸", "胱抑素"],
    ),
    (
        Category::BloodLipid,
        &["胆固醇", "甘油三酯", "脂蛋白"],
    ),
    (Category::ThyroidFunction, &["甲状腺", "tsh", "ft3", "ft4"]),
    (
        Category::TumorMarker,
        &[
            "甲胎蛋白", "癌胚抗原", "糖类抗原", "特异性抗原", "铁蛋白", "afp", "cea", "psa",
            "ca125", "ca199", "ca19-9",
        ],
    ),
    (
        Category::UrineRoutine,
        &["尿蛋白", "尿比重", "尿潜血", "尿胆原"],
    ),
    (
        Category::Inflammation,
        &["c反应蛋白", "crp", "降钙素原", "血沉", "白介素"],
    ),
    (
        Category::Electrolyte,
        &["血钾", "血钠", "血氯", "血钙", "血磷", "钾", "钠", "氯", "镁"],
    ),
];
