//! 数据表仓库
//!
//! 使用 JSON 文件存储数据表目录：
//! `[{"plugin": "...", "table": "AO_...", "rows": 12}, ...]`
//! 文件不存在时使用内置示例数据，第一次删除时写回文件。

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use ao_admin_core::{CoreError, CoreResult, TableInfo};

/// 数据表仓库 trait
pub trait TableRepository: Send {
    /// 获取全部数据表
    fn find_all(&self) -> CoreResult<Vec<TableInfo>>;

    /// 删除指定数据表；任何一个不存在则整体失败
    fn delete(&mut self, tables: &[String]) -> CoreResult<()>;
}

/// 内置示例数据
pub fn sample_tables() -> Vec<TableInfo> {
    vec![
        TableInfo::new(Some("Jira Software"), "AO_60DB71_RAPIDVIEW", Some(42)),
        TableInfo::new(Some("Jira Software"), "AO_60DB71_SPRINT", Some(318)),
        TableInfo::new(Some("Jira Software"), "AO_60DB71_COLUMN", Some(167)),
        TableInfo::new(Some("Streams Inline Actions"), "AO_563AEE_ACTIVITY_ENTITY", Some(0)),
        TableInfo::new(Some("Streams Inline Actions"), "AO_563AEE_ACTOR_ENTITY", Some(0)),
        TableInfo::new(Some("WebHooks Plugin"), "AO_4AEACD_WEBHOOK_DAO", Some(3)),
        TableInfo::new(Some("Whitelist Plugin"), "AO_21D670_WHITELIST_RULES", None),
        TableInfo::new(None, "AO_9412A1_AOUSER", Some(12)),
        TableInfo::new(None, "AO_9412A1_AONOTIFICATION", None),
    ]
}

/// 校验待删除的表全部存在，返回剩余的表
fn remaining_after(tables: &[TableInfo], names: &[String]) -> CoreResult<Vec<TableInfo>> {
    let known: HashSet<&str> = tables.iter().map(|t| t.table.as_str()).collect();
    if let Some(missing) = names.iter().find(|n| !known.contains(n.as_str())) {
        return Err(CoreError::TableNotFound(missing.clone()));
    }
    let doomed: HashSet<&str> = names.iter().map(String::as_str).collect();
    Ok(tables
        .iter()
        .filter(|t| !doomed.contains(t.table.as_str()))
        .cloned()
        .collect())
}

/// 内存仓库
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableRepository {
    tables: Vec<TableInfo>,
}

impl InMemoryTableRepository {
    pub fn new(tables: Vec<TableInfo>) -> Self {
        Self { tables }
    }
}

impl TableRepository for InMemoryTableRepository {
    fn find_all(&self) -> CoreResult<Vec<TableInfo>> {
        Ok(self.tables.clone())
    }

    fn delete(&mut self, tables: &[String]) -> CoreResult<()> {
        self.tables = remaining_after(&self.tables, tables)?;
        Ok(())
    }
}

/// 基于 JSON 文件的数据表仓库
pub struct JsonTableRepository {
    path: PathBuf,
    /// 内存缓存
    cache: InMemoryTableRepository,
}

impl JsonTableRepository {
    /// 打开仓库；文件不存在时以示例数据初始化
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let cache = Self::load_from_file(&path)?.unwrap_or_else(|| {
            log::info!("No table catalog at {}, using sample data", path.display());
            sample_tables()
        });
        Ok(Self {
            path,
            cache: InMemoryTableRepository::new(cache),
        })
    }

    /// 从文件加载数据表列表
    fn load_from_file(path: &Path) -> CoreResult<Option<Vec<TableInfo>>> {
        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(path).map_err(|e| CoreError::StorageError(e.to_string()))?;
        let tables: Vec<TableInfo> = serde_json::from_str(&content)?;
        log::info!("Loaded {} tables from {}", tables.len(), path.display());
        Ok(Some(tables))
    }

    /// 保存数据表列表到文件
    fn save_to_file(&self, tables: &[TableInfo]) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(tables)?;
        fs::write(&self.path, content).map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(())
    }
}

impl TableRepository for JsonTableRepository {
    fn find_all(&self) -> CoreResult<Vec<TableInfo>> {
        self.cache.find_all()
    }

    /// 先写文件，成功后才更新缓存
    fn delete(&mut self, tables: &[String]) -> CoreResult<()> {
        let mut next = self.cache.clone();
        next.delete(tables)?;
        self.save_to_file(&next.tables)?;
        self.cache = next;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names(tables: &[TableInfo]) -> Vec<&str> {
        tables.iter().map(|t| t.table.as_str()).collect()
    }

    #[test]
    fn test_missing_file_uses_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonTableRepository::open(dir.path().join("tables.json")).unwrap();
        assert_eq!(repo.find_all().unwrap(), sample_tables());
    }

    #[test]
    fn test_delete_persists_remaining_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        let mut repo = JsonTableRepository::open(&path).unwrap();

        repo.delete(&["AO_60DB71_SPRINT".to_string(), "AO_9412A1_AOUSER".to_string()])
            .unwrap();

        let reopened = JsonTableRepository::open(&path).unwrap();
        let tables = reopened.find_all().unwrap();
        assert_eq!(tables.len(), sample_tables().len() - 2);
        assert!(!names(&tables).contains(&"AO_60DB71_SPRINT"));
    }

    #[test]
    fn test_delete_unknown_table_changes_nothing() {
        let mut repo = InMemoryTableRepository::new(sample_tables());
        let err = repo
            .delete(&["AO_60DB71_SPRINT".to_string(), "AO_NOPE".to_string()])
            .unwrap_err();
        assert!(matches!(err, CoreError::TableNotFound(ref t) if t == "AO_NOPE"));
        assert_eq!(repo.find_all().unwrap().len(), sample_tables().len());
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        fs::write(&path, "{").unwrap();
        assert!(matches!(
            JsonTableRepository::open(&path),
            Err(CoreError::SerializationError(_))
        ));
    }
}
