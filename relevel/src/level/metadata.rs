use indexmap::IndexMap;

use crate::common::constants::{METADATA_DELIMITER, METADATA_OPEN};

/// 从关卡文本内容中解析元数据块。
///
/// 逐行扫描：一行只有在以 `<<` 开头、且其后出现 `>>:` 时才参与解析，
/// 在第一个 `>>:` 处切分为键和值 (值两侧空白被去除，值内部后续的
/// `>>:` 按字面保留)。其他行一律忽略，不视为错误。
///
/// 同一个键出现多次时，后出现的值覆盖先出现的值；键首次出现的位置
/// 决定它在结果映射中的顺序。
//
// // Parses the metadata block out of a level's text content. Non-matching
// // lines are opaque payload and are skipped silently; for duplicate keys
// // the last occurrence wins.
pub fn parse_metadata(content: &str) -> IndexMap<String, String> {
    let mut metadata = IndexMap::new();
    for line in content.lines() {
        let Some(rest) = line.strip_prefix(METADATA_OPEN) else {
            continue;
        };
        let Some((key, value)) = rest.split_once(METADATA_DELIMITER) else {
            continue;
        };
        metadata.insert(key.to_string(), value.trim().to_string());
    }
    metadata
}

/// 将 `changes` 中各键对应的元数据行改写为新值，返回改写后的完整内容。
///
/// 逐行扫描，而不是正则替换：凡是以 `<<KEY>>:` 开头的行，整行被替换为
/// `<<KEY>>:VALUE`，原行中分隔符之后的所有内容 (包括行尾多余字符) 都被
/// 丢弃。同一个键的所有匹配行都会被改写为同一个新值；与 parse 的
/// "后者覆盖前者" 刻意保持不对称。
///
/// `changes` 中在内容里没有匹配行的键不产生任何效果；本操作严格是
/// "替换已有行"，从不追加新行。其余行原样保留。
pub fn update_metadata(content: &str, changes: &IndexMap<String, String>) -> String {
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            for (key, value) in changes {
                let prefix = format!("{METADATA_OPEN}{key}{METADATA_DELIMITER}");
                if line.starts_with(&prefix) {
                    return format!("{prefix}{value}");
                }
            }
            line.to_string()
        })
        .collect();
    lines.join("\n")
}
