//! 科目识别服务
//!
//! 把全部题干、选项、解析拼成一段文本，统计各科关键词出现次数，
//! 再结合拉丁字母占比给英语加分，取得分最高的科目。

use crate::models::{Question, Subject};
use tracing::debug;

/// 拉丁字母占比超过该值时给英语加分
pub const LATIN_DENSITY_THRESHOLD: f64 = 0.4;

/// 英语加分
pub const ENGLISH_BONUS: usize = 100;

/// 各科关键词（均为小写，按子串计数）
fn keywords(subject: Subject) -> &'static [&'static str] {
    match subject {
        Subject::Chinese => &[
            "古诗", "诗句", "诗人", "文言", "修辞", "成语", "拼音", "注音", "词语", "病句",
            "比喻", "拟人", "排比", "课文", "作者", "阅读", "名著", "标点", "近义词", "反义词",
        ],
        Subject::Math => &[
            "函数", "方程", "不等式", "三角形", "四边形", "面积", "周长", "概率", "实数",
            "有理数", "分数", "坐标", "抛物线", "因式分解", "化简", "求值", "计算", "sin", "cos",
            "∠", "△", "√",
        ],
        Subject::English => &[
            "the ", " is ", " are ", " of ", "what", "which", "you", "英语", "单词", "语法",
            "完形填空", "阅读理解",
        ],
        Subject::Physics => &[
            "物理", "重力", "摩擦力", "浮力", "压强", "电流", "电压", "电阻", "电路", "速度",
            "加速度", "功率", "机械能", "磁场", "透镜", "光的", "声音", "欧姆", "焦耳", "牛顿",
        ],
        Subject::Chemistry => &[
            "化学", "元素", "原子", "分子", "离子", "化合物", "氧化", "还原", "催化剂", "溶液",
            "溶质", "沉淀", "酸", "碱", "质量守恒", "化学式", "h2o", "co2", "naoh", "hcl",
        ],
        Subject::Biology => &[
            "细胞", "基因", "遗传", "染色体", "dna", "蛋白质", "光合作用", "呼吸作用", "生态",
            "生物", "植物", "动物", "微生物", "器官", "组织", "种子", "消化", "血液",
        ],
        Subject::History => &[
            "朝代", "皇帝", "战争", "革命", "条约", "王朝", "秦朝", "汉朝", "唐朝", "宋朝",
            "元朝", "明朝", "清朝", "辛亥", "鸦片战争", "抗日", "改革开放", "世纪", "历史",
        ],
        Subject::Politics => &[
            "道德", "法律", "宪法", "权利", "义务", "公民", "社会主义", "人民代表大会", "民主",
            "法治", "核心价值观", "集体", "责任", "政治",
        ],
        Subject::Geography => &[
            "地形", "气候", "经度", "纬度", "降水", "气温", "河流", "山脉", "地图", "比例尺",
            "等高线", "季风", "板块", "人口", "城市化", "自转", "公转", "地理",
        ],
        Subject::General => &[],
    }
}

/// 拼接所有题目文本并转为小写
fn build_corpus(questions: &[Question]) -> String {
    questions
        .iter()
        .flat_map(Question::text_parts)
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

/// 拉丁字母在全部字符中的占比
pub fn latin_density(corpus: &str) -> f64 {
    let (latin, total) = corpus.chars().fold((0usize, 0usize), |(latin, total), c| {
        (latin + usize::from(c.is_ascii_alphabetic()), total + 1)
    });
    if total == 0 {
        0.0
    } else {
        latin as f64 / total as f64
    }
}

/// 计算各科得分，顺序与 `Subject::CLASSIFIABLE` 一致
pub fn score_subjects(questions: &[Question]) -> Vec<(Subject, usize)> {
    let corpus = build_corpus(questions);
    let english_bonus = if latin_density(&corpus) > LATIN_DENSITY_THRESHOLD {
        ENGLISH_BONUS
    } else {
        0
    };

    Subject::CLASSIFIABLE
        .into_iter()
        .map(|subject| {
            let mut score: usize = keywords(subject)
                .iter()
                .map(|kw| corpus.matches(kw).count())
                .sum();
            if subject == Subject::English {
                score += english_bonus;
            }
            (subject, score)
        })
        .collect()
}

/// 识别题目列表所属科目
///
/// 没有题目或所有科目得分均为 0 时返回 `Subject::General`；
/// 同分时保留先参与比较的科目。
pub fn classify_subject(questions: &[Question]) -> Subject {
    if questions.is_empty() {
        return Subject::General;
    }

    let scores = score_subjects(questions);
    debug!("科目得分: {:?}", scores);

    let mut best = Subject::General;
    let mut best_score = 0;
    for (subject, score) in scores {
        if score > best_score {
            best = subject;
            best_score = score;
        }
    }
    best
}
