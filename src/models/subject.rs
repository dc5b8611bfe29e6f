use phf::phf_map;

/// 科目枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Subject {
    /// 语文
    Chinese,
    /// 数学
    Math,
    /// 英语
    English,
    /// 物理
    Physics,
    /// 化学
    Chemistry,
    /// 生物
    Biology,
    /// 历史
    History,
    /// 政治
    Politics,
    /// 地理
    Geography,
    /// 通用（无法判断科目时使用）
    #[default]
    General,
}

/// 科目名称（全称、简称、英文名）到科目的映射
static SUBJECT_ALIASES: phf::Map<&'static str, Subject> = phf_map! {
    "语文" => Subject::Chinese,
    "语" => Subject::Chinese,
    "chinese" => Subject::Chinese,
    "数学" => Subject::Math,
    "数" => Subject::Math,
    "math" => Subject::Math,
    "英语" => Subject::English,
    "英" => Subject::English,
    "english" => Subject::English,
    "物理" => Subject::Physics,
    "物" => Subject::Physics,
    "physics" => Subject::Physics,
    "化学" => Subject::Chemistry,
    "化" => Subject::Chemistry,
    "chemistry" => Subject::Chemistry,
    "生物" => Subject::Biology,
    "生" => Subject::Biology,
    "biology" => Subject::Biology,
    "历史" => Subject::History,
    "历" => Subject::History,
    "history" => Subject::History,
    "政治" => Subject::Politics,
    "政" => Subject::Politics,
    "politics" => Subject::Politics,
    "地理" => Subject::Geography,
    "地" => Subject::Geography,
    "geography" => Subject::Geography,
    "通用" => Subject::General,
    "general" => Subject::General,
};

impl Subject {
    /// 参与自动识别的科目，顺序固定（同分时靠前者胜出）
    pub const CLASSIFIABLE: [Subject; 9] = [
        Subject::Chinese,
        Subject::Math,
        Subject::English,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::History,
        Subject::Politics,
        Subject::Geography,
    ];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Subject::Chinese => "语文",
            Subject::Math => "数学",
            Subject::English => "英语",
            Subject::Physics => "物理",
            Subject::Chemistry => "化学",
            Subject::Biology => "生物",
            Subject::History => "历史",
            Subject::Politics => "政治",
            Subject::Geography => "地理",
            Subject::General => "通用",
        }
    }

    /// 尝试从字符串解析科目（精确匹配，英文不区分大小写）
    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        SUBJECT_ALIASES.get(key.as_str()).copied()
    }

    /// 智能查找科目（支持在较长文本中查找全称，如"2025年期中数学试卷"）
    pub fn find(s: &str) -> Option<Self> {
        if let Some(subject) = Self::from_str(s) {
            return Some(subject);
        }

        let s_lower = s.to_lowercase();
        Self::CLASSIFIABLE
            .into_iter()
            .find(|subject| s_lower.contains(subject.name()))
    }

    /// 是否为兜底科目
    pub fn is_general(self) -> bool {
        self == Subject::General
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
