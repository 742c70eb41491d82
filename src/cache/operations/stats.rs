// 缓存统计操作
// 解析 Redis INFO stats 段的文本输出

use crate::cache::models::CacheStatsSnapshot;

/// 解析 INFO stats 的响应文本
///
/// 格式为逐行的 `key:value`，以 `#` 开头的是注释行。
/// 缺失或无法解析的字段按 0 处理。
pub fn parse_stats_info(info: &str) -> CacheStatsSnapshot {
    let mut snapshot = CacheStatsSnapshot::default();

    for line in info.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value: u64 = value.trim().parse().unwrap_or(0);

        match key {
            "total_connections_received" => snapshot.total_connections_received = value,
            "total_commands_processed" => snapshot.total_commands_processed = value,
            "keyspace_hits" => snapshot.keyspace_hits = value,
            "keyspace_misses" => snapshot.keyspace_misses = value,
            _ => {}
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stats_section() {
        let info = "# Stats\r\n\
                    total_connections_received:105\r\n\
                    total_commands_processed:2048\r\n\
                    instantaneous_ops_per_sec:3\r\n\
                    keyspace_hits:70\r\n\
                    keyspace_misses:30\r\n";

        let snapshot = parse_stats_info(info);
        assert_eq!(snapshot.total_connections_received, 105);
        assert_eq!(snapshot.total_commands_processed, 2048);
        assert_eq!(snapshot.keyspace_hits, 70);
        assert_eq!(snapshot.keyspace_misses, 30);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let snapshot = parse_stats_info("# Stats\r\nkeyspace_hits:5\r\n");
        assert_eq!(snapshot.keyspace_hits, 5);
        assert_eq!(snapshot.keyspace_misses, 0);
        assert_eq!(snapshot.total_commands_processed, 0);
    }

    #[test]
    fn garbage_lines_are_ignored() {
        let snapshot = parse_stats_info("not a stats line\nkeyspace_misses:abc\n");
        assert_eq!(snapshot, CacheStatsSnapshot::default());
    }
}
