use crate::domain::classification::entities::ItemKind;

/// Classification rubric sent as the fixed part of every classification
/// prompt. The response is additionally constrained by
/// [`super::schema::classification_response_schema`].
const CLASSIFICATION_RUBRIC: &str = "你是一位专注于肾脏健康的医疗专家，精通慢性肾病（CKD）患者的饮食与生活管理。\
请对用户提供的项目进行分类，并基于其对肾脏健康的影响给出明确的指导。\
分类标准：\
- 绿色（green）：对所有 CKD 患者（包括透析患者）安全，推荐。\
- 黄色（yellow）：需在医生或营养师指导下，根据个人肾功能和当前阶段控制。\
- 红色（red）：对大多数 CKD 患者（尤其是中晚期患者）不推荐，应避免。\
分析维度：\
1. 蛋白质含量（过高会增加肾脏负担）\
2. 钠含量（过高会导致血压升高，加重水肿）\
3. 钾含量（肾功能不全时易引发高血钾）\
4. 磷含量（肾功能不全时易引发高血磷）\
5. 其他可能对肾脏产生影响的因素。\
回答要求：\
- 明确给出分类结果（仅 green、yellow 或 red）。\
- 详细说明分类理由，特别是基于上述维度的分析。\
- 提供针对 CKD 患者的具体建议，包括食用量、烹饪方法等。\
- 使用专业、客观的医学术语，同时确保表达清晰易懂，所有文字使用中文。\
- 如遇不确定情况，请基于现有医学知识给出最合理的判断，并建议用户咨询其主治医生。";

/// Renal-diet rubric for recipe generation.
const RECIPE_RUBRIC: &str = "你是一位专业的肾脏健康营养师，擅长为慢性肾病（CKD）患者设计食谱。\
请基于以下原则创建一个适合 CKD 患者的健康食谱：\
1. 低蛋白质（对于未透析患者）或适量优质蛋白（对于透析患者）\
2. 低钠、低钾、低磷、低油\
3. 富含必需氨基酸和维生素\
4. 易于准备，食材常见\
5. 美味可口，适合长期食用\
请提供菜名、适合人群标签（如：低蛋白、低磷、低钠、低钾）、详细的食材清单及用量、\
详细的烹饪步骤，以及营养价值和对肾脏健康的益处，所有文字使用中文。";

pub fn classification_prompt(query: &str, kind: ItemKind) -> String {
    let task = match kind {
        ItemKind::Food => "请对以下食物进行分类",
        ItemKind::Activity => "请对以下活动进行分类",
        ItemKind::Medicine => "请对以下药物进行分类",
    };
    format!("{CLASSIFICATION_RUBRIC}\n\n{task}：{query}")
}

pub fn recipe_prompt() -> String {
    format!("{RECIPE_RUBRIC}\n\n请生成一个适合 CKD 患者的健康食谱。")
}
