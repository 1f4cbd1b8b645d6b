use crate::domain::classification::entities::RecipeRecord;

fn recipe(
    dish_name: &str,
    tags: &[&str],
    ingredients: &[&str],
    steps: &[&str],
    nutrition_benefit: &str,
) -> RecipeRecord {
    RecipeRecord {
        dish_name: dish_name.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        nutrition_benefit: nutrition_benefit.to_string(),
    }
}

/// Curated kidney-friendly recipes, sampled uniformly when neither the store
/// nor the LLM yields one.
pub(super) fn curated_recipes() -> Vec<RecipeRecord> {
    vec![
        recipe(
            "清蒸鲈鱼",
            &["低蛋白", "低磷", "低钠", "低钾"],
            &["鲈鱼 1条", "姜丝 10克", "葱段 20克", "料酒 5毫升", "盐 2克", "蒸鱼豉油 10毫升"],
            &["1. 将鲈鱼洗净，在鱼身上划几刀", "2. 在鱼身上撒上姜丝和葱段", "3. 淋上料酒和少许盐", "4. 放入蒸锅中蒸8-10分钟", "5. 取出后淋上蒸鱼豉油即可"],
            "鲈鱼是优质蛋白的来源，含有丰富的不饱和脂肪酸，有助于降低血脂。清蒸的烹饪方式减少了油脂的摄入，适合CKD患者食用。",
        ),
        recipe(
            "清炒西兰花",
            &["低蛋白", "低磷", "低钠", "低钾"],
            &["西兰花 200克", "蒜末 10克", "盐 2克", "植物油 10毫升"],
            &["1. 将西兰花切成小朵，洗净", "2. 锅中烧开水，放入西兰花焯水1-2分钟", "3. 锅中倒入植物油，爆香蒜末", "4. 放入西兰花翻炒均匀", "5. 加入少许盐调味即可"],
            "西兰花富含维生素C和膳食纤维，有助于增强免疫力和促进肠道健康。清炒的烹饪方式减少了油脂的摄入，适合CKD患者食用。",
        ),
        recipe(
            "番茄鸡蛋汤",
            &["低蛋白", "低磷", "低钠", "低钾"],
            &["番茄 1个", "鸡蛋 1个", "葱花 5克", "盐 2克", "植物油 5毫升", "水 500毫升"],
            &["1. 将番茄洗净，切成小块", "2. 锅中倒入植物油，放入番茄翻炒出汁", "3. 加入水烧开", "4. 将鸡蛋打散，缓慢倒入锅中", "5. 加入少许盐调味，撒上葱花即可"],
            "番茄富含维生素C和番茄红素，有助于抗氧化和保护心血管健康。鸡蛋是优质蛋白的来源，番茄鸡蛋汤清淡易消化，适合CKD患者食用。",
        ),
        recipe(
            "凉拌黄瓜",
            &["低蛋白", "低磷", "低钠", "低钾"],
            &["黄瓜 1根", "蒜末 5克", "醋 10毫升", "香油 5毫升", "盐 2克"],
            &["1. 将黄瓜洗净，拍碎切块", "2. 加入蒜末、醋、香油和少许盐", "3. 搅拌均匀即可"],
            "黄瓜富含水分和膳食纤维，有助于清热解渴和促进肠道健康。凉拌的烹饪方式减少了油脂的摄入，适合CKD患者食用。",
        ),
        recipe(
            "南瓜粥",
            &["低蛋白", "低磷", "低钠", "低钾"],
            &["南瓜 100克", "大米 50克", "水 500毫升"],
            &["1. 将南瓜洗净，去皮切块", "2. 将大米洗净", "3. 锅中加入水，放入大米和南瓜", "4. 大火烧开后转小火煮30分钟", "5. 煮至粥浓稠即可"],
            "南瓜富含胡萝卜素和膳食纤维，有助于保护视力和促进肠道健康。南瓜粥清淡易消化，适合CKD患者食用。",
        ),
        recipe(
            "冬瓜排骨汤",
            &["低蛋白", "低磷", "低钠", "低钾"],
            &["冬瓜 200克", "排骨 100克", "姜 5克", "盐 2克", "水 800毫升"],
            &["1. 将排骨洗净，焯水去除血水", "2. 冬瓜洗净，去皮切块", "3. 锅中加入水，放入排骨和姜", "4. 大火烧开后转小火煮40分钟", "5. 加入冬瓜继续煮20分钟", "6. 加入少许盐调味即可"],
            "冬瓜富含水分和膳食纤维，有助于清热解渴和促进排尿。排骨是优质蛋白的来源，冬瓜排骨汤清淡易消化，适合CKD患者食用。",
        ),
        recipe(
            "炒藕片",
            &["低蛋白", "低磷", "低钠", "低钾"],
            &["藕 1节", "蒜末 5克", "盐 2克", "植物油 10毫升"],
            &["1. 将藕洗净，去皮切片", "2. 锅中烧开水，放入藕片焯水1-2分钟", "3. 锅中倒入植物油，爆香蒜末", "4. 放入藕片翻炒均匀", "5. 加入少许盐调味即可"],
            "藕富含膳食纤维和维生素C，有助于促进肠道健康和增强免疫力。清炒的烹饪方式减少了油脂的摄入，适合CKD患者食用。",
        ),
        recipe(
            "鸡蛋羹",
            &["低蛋白", "低磷", "低钠", "低钾"],
            &["鸡蛋 1个", "温水 150毫升", "盐 1克", "香油 2毫升"],
            &["1. 将鸡蛋打散", "2. 加入温水和少许盐，搅拌均匀", "3. 撇去浮沫", "4. 放入蒸锅中蒸10分钟", "5. 淋上香油即可"],
            "鸡蛋是优质蛋白的来源，鸡蛋羹清淡易消化，适合CKD患者食用。",
        ),
    ]
}
