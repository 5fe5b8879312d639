use std::path::Path;

/// 项目识别标记：源文件扩展名、依赖清单与说明文件名
#[derive(Debug, Clone)]
pub struct ProjectMarkers {
    pub source_extension: String,
    pub manifest_file: String,
    pub readme_file: String,
}

impl Default for ProjectMarkers {
    fn default() -> Self {
        Self {
            source_extension: "py".to_string(),
            manifest_file: "requirements.txt".to_string(),
            readme_file: "README.md".to_string(),
        }
    }
}

impl ProjectMarkers {
    /// 按扩展名判断（区分大小写）
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.source_extension)
            .unwrap_or(false)
    }

    pub fn has_manifest(&self, dir: &Path) -> bool {
        dir.join(&self.manifest_file).exists()
    }

    pub fn has_readme(&self, dir: &Path) -> bool {
        dir.join(&self.readme_file).exists()
    }
}
