use crate::domain::classification::entities::{
    ClassificationRecord, ItemKind,
    Level::{self, Green, Red, Yellow},
};

fn item(name: &str, level: Level, reason: &str, advice: &str) -> ClassificationRecord {
    ClassificationRecord {
        name: name.to_string(),
        level,
        reason: reason.to_string(),
        advice: advice.to_string(),
        kind: ItemKind::Food,
    }
}

/// Curated food classifications bundled with the binary, used as the final
/// resolution fallback and as the source of the whitelist and blacklist
/// views.
pub(super) fn curated_foods() -> Vec<ClassificationRecord> {
    vec![
        item(
            "苹果",
            Green,
            "苹果是低蛋白、低钾、低磷的水果，富含维生素C和纤维素，适合所有CKD患者食用。",
            "每天可食用1-2个中等大小的苹果。",
        ),
        item(
            "香蕉",
            Yellow,
            "香蕉含有较高的钾，对于肾功能不全的患者可能需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "菠菜",
            Yellow,
            "菠菜含有较高的钾和草酸，肾功能不全的患者需要限制食用。",
            "可通过焯水减少草酸含量，肾功能不全的患者应控制食用量。",
        ),
        item(
            "土豆",
            Yellow,
            "土豆含有较高的钾，肾功能不全的患者需要限制食用。",
            "可通过浸泡或焯水减少钾含量，肾功能不全的患者应控制食用量。",
        ),
        item(
            "鸡蛋",
            Yellow,
            "鸡蛋是优质蛋白的来源，但含有一定量的磷，需要根据肾功能情况控制食用量。",
            "每天可食用1-2个鸡蛋，肾功能不全的患者应在医生指导下调整食用量。",
        ),
        item(
            "牛奶",
            Yellow,
            "牛奶含有较高的磷和蛋白质，肾功能不全的患者需要限制食用。",
            "可选择低磷牛奶或在医生指导下控制食用量。",
        ),
        item(
            "瘦肉",
            Yellow,
            "瘦肉是优质蛋白的来源，但含有一定量的磷，需要根据肾功能情况控制食用量。",
            "每天可食用50-100克瘦肉，肾功能不全的患者应在医生指导下调整食用量。",
        ),
        item(
            "豆腐",
            Yellow,
            "豆腐是植物蛋白的来源，含有一定量的磷，需要根据肾功能情况控制食用量。",
            "每天可食用50-100克豆腐，肾功能不全的患者应在医生指导下调整食用量。",
        ),
        item(
            "米饭",
            Green,
            "米饭是低蛋白、低钾、低磷的主食，适合所有CKD患者食用。",
            "每天可食用150-200克米饭。",
        ),
        item(
            "面条",
            Green,
            "面条是低蛋白、低钾、低磷的主食，适合所有CKD患者食用。",
            "每天可食用150-200克面条。",
        ),
        item(
            "馒头",
            Green,
            "馒头是低蛋白、低钾、低磷的主食，适合所有CKD患者食用。",
            "每天可食用100-150克馒头。",
        ),
        item(
            "面包",
            Yellow,
            "面包含有一定量的钠，需要注意选择低钠面包。",
            "选择低钠面包，每天可食用50-100克。",
        ),
        item(
            "橙子",
            Yellow,
            "橙子含有较高的钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "橘子",
            Yellow,
            "橘子含有较高的钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "葡萄",
            Green,
            "葡萄是低蛋白、低钾、低磷的水果，适合所有CKD患者食用。",
            "每天可食用10-15颗葡萄。",
        ),
        item(
            "草莓",
            Green,
            "草莓是低蛋白、低钾、低磷的水果，富含维生素C，适合所有CKD患者食用。",
            "每天可食用10-15颗草莓。",
        ),
        item(
            "蓝莓",
            Green,
            "蓝莓是低蛋白、低钾、低磷的水果，富含抗氧化物质，适合所有CKD患者食用。",
            "每天可食用一小碗蓝莓。",
        ),
        item(
            "梨",
            Green,
            "梨是低蛋白、低钾、低磷的水果，适合所有CKD患者食用。",
            "每天可食用1个中等大小的梨。",
        ),
        item(
            "桃",
            Green,
            "桃是低蛋白、低钾、低磷的水果，适合所有CKD患者食用。",
            "每天可食用1个中等大小的桃。",
        ),
        item(
            "杏",
            Green,
            "杏是低蛋白、低钾、低磷的水果，适合所有CKD患者食用。",
            "每天可食用3-5个杏。",
        ),
        item(
            "西瓜",
            Green,
            "西瓜是低蛋白、低钾、低磷的水果，富含水分，适合所有CKD患者食用。",
            "每天可食用200-300克西瓜。",
        ),
        item(
            "黄瓜",
            Green,
            "黄瓜是低蛋白、低钾、低磷的蔬菜，富含水分和纤维素，适合所有CKD患者食用。",
            "每天可食用100-200克黄瓜。",
        ),
        item(
            "西红柿",
            Green,
            "西红柿是低蛋白、低钾、低磷的蔬菜，富含维生素C和番茄红素，适合所有CKD患者食用。",
            "每天可食用100-200克西红柿。",
        ),
        item(
            "胡萝卜",
            Green,
            "胡萝卜是低蛋白、低钾、低磷的蔬菜，富含胡萝卜素，适合所有CKD患者食用。",
            "每天可食用100-150克胡萝卜。",
        ),
        item(
            "白萝卜",
            Green,
            "白萝卜是低蛋白、低钾、低磷的蔬菜，适合所有CKD患者食用。",
            "每天可食用100-150克白萝卜。",
        ),
        item(
            "洋葱",
            Green,
            "洋葱是低蛋白、低钾、低磷的蔬菜，适合所有CKD患者食用。",
            "每天可食用50-100克洋葱。",
        ),
        item(
            "大蒜",
            Green,
            "大蒜是低蛋白、低钾、低磷的调味品，具有抗菌和抗氧化作用，适合所有CKD患者食用。",
            "每天可食用2-3瓣大蒜。",
        ),
        item(
            "姜",
            Green,
            "姜是低蛋白、低钾、低磷的调味品，具有温中散寒的作用，适合所有CKD患者食用。",
            "每天可食用5-10克姜。",
        ),
        item(
            "葱",
            Green,
            "葱是低蛋白、低钾、低磷的调味品，适合所有CKD患者食用。",
            "每天可食用50-100克葱。",
        ),
        item(
            "青椒",
            Green,
            "青椒是低蛋白、低钾、低磷的蔬菜，富含维生素C，适合所有CKD患者食用。",
            "每天可食用100-150克青椒。",
        ),
        item(
            "茄子",
            Green,
            "茄子是低蛋白、低钾、低磷的蔬菜，适合所有CKD患者食用。",
            "每天可食用100-150克茄子。",
        ),
        item(
            "南瓜",
            Green,
            "南瓜是低蛋白、低钾、低磷的蔬菜，富含胡萝卜素，适合所有CKD患者食用。",
            "每天可食用100-150克南瓜。",
        ),
        item(
            "冬瓜",
            Green,
            "冬瓜是低蛋白、低钾、低磷的蔬菜，富含水分，具有利尿作用，适合所有CKD患者食用。",
            "每天可食用100-200克冬瓜。",
        ),
        item(
            "丝瓜",
            Green,
            "丝瓜是低蛋白、低钾、低磷的蔬菜，富含水分，适合所有CKD患者食用。",
            "每天可食用100-150克丝瓜。",
        ),
        item(
            "苦瓜",
            Green,
            "苦瓜是低蛋白、低钾、低磷的蔬菜，具有清热解毒的作用，适合所有CKD患者食用。",
            "每天可食用100-150克苦瓜。",
        ),
        item(
            "西兰花",
            Yellow,
            "西兰花含有较高的钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "菜花",
            Green,
            "菜花是低蛋白、低钾、低磷的蔬菜，适合所有CKD患者食用。",
            "每天可食用100-150克菜花。",
        ),
        item(
            "白菜",
            Green,
            "白菜是低蛋白、低钾、低磷的蔬菜，适合所有CKD患者食用。",
            "每天可食用100-200克白菜。",
        ),
        item(
            "生菜",
            Green,
            "生菜是低蛋白、低钾、低磷的蔬菜，富含水分和纤维素，适合所有CKD患者食用。",
            "每天可食用100-200克生菜。",
        ),
        item(
            "油麦菜",
            Green,
            "油麦菜是低蛋白、低钾、低磷的蔬菜，适合所有CKD患者食用。",
            "每天可食用100-200克油麦菜。",
        ),
        item(
            "空心菜",
            Yellow,
            "空心菜含有较高的钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "苋菜",
            Yellow,
            "苋菜含有较高的钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "莴笋",
            Green,
            "莴笋是低蛋白、低钾、低磷的蔬菜，适合所有CKD患者食用。",
            "每天可食用100-150克莴笋。",
        ),
        item(
            "竹笋",
            Green,
            "竹笋是低蛋白、低钾、低磷的蔬菜，适合所有CKD患者食用。",
            "每天可食用50-100克竹笋。",
        ),
        item(
            "香菇",
            Yellow,
            "香菇含有较高的磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "金针菇",
            Green,
            "金针菇是低蛋白、低钾、低磷的菌类，适合所有CKD患者食用。",
            "每天可食用50-100克金针菇。",
        ),
        item(
            "平菇",
            Green,
            "平菇是低蛋白、低钾、低磷的菌类，适合所有CKD患者食用。",
            "每天可食用50-100克平菇。",
        ),
        item(
            "鸡肉",
            Yellow,
            "鸡肉是优质蛋白的来源，但含有一定量的磷，需要根据肾功能情况控制食用量。",
            "每天可食用50-100克鸡肉，肾功能不全的患者应在医生指导下调整食用量。",
        ),
        item(
            "鸭肉",
            Yellow,
            "鸭肉是优质蛋白的来源，但含有一定量的磷，需要根据肾功能情况控制食用量。",
            "每天可食用50-100克鸭肉，肾功能不全的患者应在医生指导下调整食用量。",
        ),
        item(
            "鱼肉",
            Yellow,
            "鱼肉是优质蛋白的来源，但含有一定量的磷，需要根据肾功能情况控制食用量。",
            "每天可食用50-100克鱼肉，肾功能不全的患者应在医生指导下调整食用量。",
        ),
        item(
            "虾",
            Yellow,
            "虾是优质蛋白的来源，但含有较高的磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "蟹",
            Red,
            "蟹含有较高的磷和嘌呤，不适合CKD患者食用。",
            "建议避免食用蟹类。",
        ),
        item(
            "牛肉",
            Yellow,
            "牛肉是优质蛋白的来源，但含有较高的磷和嘌呤，需要根据肾功能情况控制食用量。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "羊肉",
            Yellow,
            "羊肉是优质蛋白的来源，但含有较高的磷和嘌呤，需要根据肾功能情况控制食用量。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "猪肉",
            Yellow,
            "猪肉是优质蛋白的来源，但含有较高的磷和嘌呤，需要根据肾功能情况控制食用量。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "猪肝",
            Red,
            "猪肝含有极高的磷和嘌呤，不适合CKD患者食用。",
            "建议避免食用动物内脏。",
        ),
        item(
            "猪肾",
            Red,
            "猪肾含有极高的磷和嘌呤，不适合CKD患者食用。",
            "建议避免食用动物内脏。",
        ),
        item(
            "鸡蛋黄",
            Yellow,
            "鸡蛋黄含有较高的磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "鸭蛋黄",
            Yellow,
            "鸭蛋黄含有较高的磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "鹅蛋",
            Yellow,
            "鹅蛋含有较高的磷和蛋白质，需要根据肾功能情况控制食用量。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "羊奶",
            Yellow,
            "羊奶含有较高的磷和蛋白质，肾功能不全的患者需要限制食用。",
            "可选择低磷羊奶或在医生指导下控制食用量。",
        ),
        item(
            "酸奶",
            Yellow,
            "酸奶含有较高的磷和蛋白质，肾功能不全的患者需要限制食用。",
            "可选择低磷酸奶或在医生指导下控制食用量。",
        ),
        item(
            "奶酪",
            Red,
            "奶酪含有极高的磷和蛋白质，不适合CKD患者食用。",
            "建议避免食用奶酪。",
        ),
        item(
            "豆浆",
            Yellow,
            "豆浆含有较高的植物蛋白和钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "豆腐脑",
            Yellow,
            "豆腐脑含有较高的植物蛋白，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "豆腐干",
            Yellow,
            "豆腐干含有较高的植物蛋白，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "豆腐皮",
            Yellow,
            "豆腐皮含有较高的植物蛋白，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "腐竹",
            Yellow,
            "腐竹含有较高的植物蛋白，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "红豆",
            Yellow,
            "红豆含有较高的植物蛋白和钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "绿豆",
            Yellow,
            "绿豆含有较高的植物蛋白和钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "黄豆",
            Yellow,
            "黄豆含有较高的植物蛋白和钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "黑豆",
            Yellow,
            "黑豆含有较高的植物蛋白和钾，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "花生",
            Yellow,
            "花生含有较高的植物蛋白和磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "核桃",
            Yellow,
            "核桃含有较高的植物蛋白和磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "杏仁",
            Yellow,
            "杏仁含有较高的植物蛋白和磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "腰果",
            Yellow,
            "腰果含有较高的植物蛋白和磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "开心果",
            Yellow,
            "开心果含有较高的植物蛋白和磷，肾功能不全的患者需要限制食用。",
            "肾功能正常的患者可适量食用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "巧克力",
            Red,
            "巧克力含有较高的钾、磷和脂肪，不适合CKD患者食用。",
            "建议避免食用巧克力。",
        ),
        item(
            "冰淇淋",
            Red,
            "冰淇淋含有较高的磷、钾和脂肪，不适合CKD患者食用。",
            "建议避免食用冰淇淋。",
        ),
        item(
            "蛋糕",
            Yellow,
            "蛋糕含有较高的钠和糖，需要注意选择低钠低糖的蛋糕。",
            "选择低钠低糖的蛋糕，每天可食用一小块。",
        ),
        item(
            "饼干",
            Yellow,
            "饼干含有较高的钠和糖，需要注意选择低钠低糖的饼干。",
            "选择低钠低糖的饼干，每天可食用少量。",
        ),
        item(
            "薯片",
            Red,
            "薯片含有极高的钠和脂肪，不适合CKD患者食用。",
            "建议避免食用油炸食品。",
        ),
        item(
            "薯条",
            Red,
            "薯条含有极高的钠和脂肪，不适合CKD患者食用。",
            "建议避免食用油炸食品。",
        ),
        item(
            "汉堡",
            Red,
            "汉堡含有极高的钠、脂肪和磷，不适合CKD患者食用。",
            "建议避免食用快餐食品。",
        ),
        item(
            "披萨",
            Red,
            "披萨含有极高的钠、脂肪和磷，不适合CKD患者食用。",
            "建议避免食用快餐食品。",
        ),
        item(
            "方便面",
            Red,
            "方便面含有极高的钠和防腐剂，不适合CKD患者食用。",
            "建议避免食用方便食品。",
        ),
        item(
            "火腿肠",
            Red,
            "火腿肠含有极高的钠、防腐剂和磷，不适合CKD患者食用。",
            "建议避免食用加工肉类。",
        ),
        item(
            "腊肉",
            Red,
            "腊肉含有极高的钠、防腐剂和磷，不适合CKD患者食用。",
            "建议避免食用加工肉类。",
        ),
        item(
            "咸菜",
            Red,
            "咸菜含有极高的钠，不适合CKD患者食用。",
            "建议避免食用腌制食品。",
        ),
        item(
            "泡菜",
            Red,
            "泡菜含有极高的钠，不适合CKD患者食用。",
            "建议避免食用腌制食品。",
        ),
        item(
            "酱菜",
            Red,
            "酱菜含有极高的钠，不适合CKD患者食用。",
            "建议避免食用腌制食品。",
        ),
        item(
            "酱油",
            Yellow,
            "酱油含有较高的钠，需要注意选择低钠酱油。",
            "选择低钠酱油，每天使用量不超过10毫升。",
        ),
        item(
            "醋",
            Green,
            "醋是低钠、低钾、低磷的调味品，适合所有CKD患者食用。",
            "每天可使用适量的醋。",
        ),
        item(
            "盐",
            Yellow,
            "盐含有钠，需要严格控制摄入量。",
            "每天盐摄入量不超过5克，肾功能不全的患者应控制在3克以内。",
        ),
        item(
            "糖",
            Green,
            "糖是低钠、低钾、低磷的调味品，适合所有CKD患者食用，但需要控制摄入量。",
            "每天糖摄入量不超过25克。",
        ),
        item(
            "蜂蜜",
            Green,
            "蜂蜜是低钠、低钾、低磷的调味品，适合所有CKD患者食用，但需要控制摄入量。",
            "每天蜂蜜摄入量不超过15毫升。",
        ),
        item(
            "橄榄油",
            Green,
            "橄榄油是健康的脂肪来源，适合所有CKD患者食用。",
            "每天可使用10-15毫升橄榄油。",
        ),
        item(
            "花生油",
            Green,
            "花生油是健康的脂肪来源，适合所有CKD患者食用。",
            "每天可使用10-15毫升花生油。",
        ),
        item(
            "大豆油",
            Green,
            "大豆油是健康的脂肪来源，适合所有CKD患者食用。",
            "每天可使用10-15毫升大豆油。",
        ),
        item(
            "玉米油",
            Green,
            "玉米油是健康的脂肪来源，适合所有CKD患者食用。",
            "每天可使用10-15毫升玉米油。",
        ),
        item(
            "葵花籽油",
            Green,
            "葵花籽油是健康的脂肪来源，适合所有CKD患者食用。",
            "每天可使用10-15毫升葵花籽油。",
        ),
        item(
            "猪油",
            Yellow,
            "猪油含有较高的饱和脂肪，需要限制食用。",
            "建议选择植物油，猪油应少量食用。",
        ),
        item(
            "牛油",
            Yellow,
            "牛油含有较高的饱和脂肪，需要限制食用。",
            "建议选择植物油，牛油应少量食用。",
        ),
        item(
            "羊油",
            Yellow,
            "羊油含有较高的饱和脂肪，需要限制食用。",
            "建议选择植物油，羊油应少量食用。",
        ),
        item(
            "茶",
            Green,
            "茶是低钠、低钾、低磷的饮品，适合所有CKD患者食用。",
            "每天可饮用2-3杯茶，但避免饮用浓茶。",
        ),
        item(
            "咖啡",
            Green,
            "咖啡是低钠、低钾、低磷的饮品，适合所有CKD患者食用，但需要控制摄入量。",
            "每天可饮用1-2杯咖啡，避免添加过多的糖和奶。",
        ),
        item(
            "果汁",
            Yellow,
            "果汁含有较高的钾和糖，需要限制食用。",
            "肾功能正常的患者可适量饮用，肾功能不全的患者应在医生指导下控制食用量。",
        ),
        item(
            "可乐",
            Red,
            "可乐含有较高的磷和糖，不适合CKD患者食用。",
            "建议避免饮用碳酸饮料。",
        ),
        item(
            "雪碧",
            Yellow,
            "雪碧含有较高的糖，需要限制食用。",
            "可少量饮用，但避免过量。",
        ),
        item(
            "矿泉水",
            Green,
            "矿泉水是低钠、低钾、低磷的饮品，适合所有CKD患者食用。",
            "每天可饮用1500-2000毫升矿泉水。",
        ),
        item(
            "纯净水",
            Green,
            "纯净水是低钠、低钾、低磷的饮品，适合所有CKD患者食用。",
            "每天可饮用1500-2000毫升纯净水。",
        ),
        item(
            "火锅",
            Yellow,
            "火锅通常含有较高的盐分和嘌呤，可能会增加肾脏负担。",
            "建议选择清淡汤底，避免食用内脏和加工肉类，控制食用频率。",
        ),
    ]
}
