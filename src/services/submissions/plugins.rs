//! 提交插件
//!
//! 每条提交按注册顺序附带所有插件的数据；文件与在线文本各用一次批量查询加载。

use std::collections::HashMap;

use crate::errors::Result;
use crate::models::assignments::entities::CourseModule;
use crate::models::submissions::{
    entities::{FILE_AREA, OnlineText, SubmissionRecord},
    responses::{EditorField, FileArea, FileInfo, SubmissionPlugin},
};
use crate::storage::RecordStore;

/// 已启用的提交插件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPluginKind {
    File,
    OnlineText,
    Comments,
}

/// 输出顺序
pub const REGISTERED_PLUGINS: [SubmissionPluginKind; 3] = [
    SubmissionPluginKind::File,
    SubmissionPluginKind::OnlineText,
    SubmissionPluginKind::Comments,
];

impl SubmissionPluginKind {
    pub fn plugin_type(&self) -> &'static str {
        match self {
            SubmissionPluginKind::File => "file",
            SubmissionPluginKind::OnlineText => "onlinetext",
            SubmissionPluginKind::Comments => "comments",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubmissionPluginKind::File => "File submissions",
            SubmissionPluginKind::OnlineText => "Online text",
            SubmissionPluginKind::Comments => "Submission comments",
        }
    }

    pub fn render(&self, submission: &SubmissionRecord, payloads: &PluginPayloads) -> SubmissionPlugin {
        let mut plugin = SubmissionPlugin {
            plugin_type: self.plugin_type().to_string(),
            name: self.name().to_string(),
            fileareas: Vec::new(),
            editorfields: Vec::new(),
        };

        match self {
            SubmissionPluginKind::File => plugin.fileareas.push(FileArea {
                area: FILE_AREA.to_string(),
                files: payloads
                    .files
                    .get(&submission.id)
                    .cloned()
                    .unwrap_or_default(),
            }),
            SubmissionPluginKind::OnlineText => {
                let text = payloads.online_texts.get(&submission.id);
                plugin.editorfields.push(EditorField {
                    name: "onlinetext".to_string(),
                    description: "Online text".to_string(),
                    text: text.and_then(|t| t.text.clone()).unwrap_or_default(),
                    format: text.map(|t| t.format).unwrap_or(0),
                });
            }
            SubmissionPluginKind::Comments => {}
        }

        plugin
    }
}

/// 按提交 ID 索引的插件数据
#[derive(Debug, Default)]
pub struct PluginPayloads {
    files: HashMap<i64, Vec<FileInfo>>,
    online_texts: HashMap<i64, OnlineText>,
}

impl PluginPayloads {
    /// 加载一批提交的文件与在线文本
    ///
    /// 文件的上下文必须是提交所属作业的课程模块，目录占位记录不返回。
    pub async fn load(
        store: &dyn RecordStore,
        submissions: &[SubmissionRecord],
        modules: &[CourseModule],
    ) -> Result<Self> {
        if submissions.is_empty() {
            return Ok(Self::default());
        }

        let context_of: HashMap<i64, i64> = modules.iter().map(|m| (m.instance, m.id)).collect();
        let expected_context: HashMap<i64, i64> = submissions
            .iter()
            .filter_map(|s| context_of.get(&s.assignment_id).map(|&cm| (s.id, cm)))
            .collect();

        let submission_ids: Vec<i64> = submissions.iter().map(|s| s.id).collect();
        let context_ids: Vec<i64> = modules.iter().map(|m| m.id).collect();

        let mut files: HashMap<i64, Vec<FileInfo>> = HashMap::new();
        for file in store
            .list_submission_files(&context_ids, &submission_ids)
            .await?
        {
            if file.is_directory() || expected_context.get(&file.item_id) != Some(&file.context_id)
            {
                continue;
            }
            files.entry(file.item_id).or_default().push(FileInfo {
                filepath: file.full_path(),
            });
        }

        let online_texts = store
            .list_online_texts(&submission_ids)
            .await?
            .into_iter()
            .map(|t| (t.submission_id, t))
            .collect();

        Ok(Self {
            files,
            online_texts,
        })
    }

    /// 所有已注册插件的数据，按注册顺序
    pub fn plugins_for(&self, submission: &SubmissionRecord) -> Vec<SubmissionPlugin> {
        REGISTERED_PLUGINS
            .iter()
            .map(|kind| kind.render(submission, self))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submissions::entities::{FILE_COMPONENT, SubmissionFile};
    use crate::services::fakes::{FakeStore, module};

    fn submission(id: i64, assignment_id: i64) -> SubmissionRecord {
        SubmissionRecord {
            id,
            assignment_id,
            user_id: 42,
            time_created: 0,
            time_modified: 0,
            status: Some("submitted".to_string()),
            group_id: 0,
            attempt_number: 0,
        }
    }

    fn file(id: i64, context_id: i64, item_id: i64, name: &str, modified: i64) -> SubmissionFile {
        SubmissionFile {
            id,
            context_id,
            component: FILE_COMPONENT.to_string(),
            file_area: FILE_AREA.to_string(),
            item_id,
            file_path: "/".to_string(),
            file_name: name.to_string(),
            time_modified: modified,
        }
    }

    #[tokio::test]
    async fn test_files_are_filtered_and_ordered() {
        let store = FakeStore {
            files: vec![
                file(1, 50, 8, "b.pdf", 20),
                file(2, 50, 8, ".", 5),
                file(3, 50, 8, "a.pdf", 10),
                // 上下文属于另一个作业
                file(4, 60, 8, "stray.pdf", 1),
            ],
            ..Default::default()
        };
        let modules = [module(50, 3, 5), module(60, 3, 6)];

        let payloads = PluginPayloads::load(&store, &[submission(8, 5)], &modules)
            .await
            .unwrap();
        let plugins = payloads.plugins_for(&submission(8, 5));

        let files: Vec<&str> = plugins[0].fileareas[0]
            .files
            .iter()
            .map(|f| f.filepath.as_str())
            .collect();
        assert_eq!(files, vec!["/a.pdf", "/b.pdf"]);
    }

    #[tokio::test]
    async fn test_registry_order_and_defaults() {
        let store = FakeStore::default();
        let payloads = PluginPayloads::load(&store, &[submission(8, 5)], &[module(50, 3, 5)])
            .await
            .unwrap();
        let plugins = payloads.plugins_for(&submission(8, 5));

        let types: Vec<&str> = plugins.iter().map(|p| p.plugin_type.as_str()).collect();
        assert_eq!(types, vec!["file", "onlinetext", "comments"]);

        assert_eq!(plugins[0].fileareas[0].area, "submission_files");
        assert!(plugins[0].fileareas[0].files.is_empty());

        let editor = &plugins[1].editorfields[0];
        assert_eq!(editor.name, "onlinetext");
        assert_eq!(editor.text, "");
        assert_eq!(editor.format, 0);

        assert!(plugins[2].fileareas.is_empty());
        assert!(plugins[2].editorfields.is_empty());
    }

    #[tokio::test]
    async fn test_online_text_payload() {
        let store = FakeStore {
            online_texts: vec![OnlineText {
                submission_id: 8,
                text: Some("<p>essay</p>".to_string()),
                format: 1,
            }],
            ..Default::default()
        };
        let payloads = PluginPayloads::load(&store, &[submission(8, 5)], &[module(50, 3, 5)])
            .await
            .unwrap();

        let editor = &payloads.plugins_for(&submission(8, 5))[1].editorfields[0];
        assert_eq!(editor.text, "<p>essay</p>");
        assert_eq!(editor.format, 1);
    }

    #[tokio::test]
    async fn test_no_submissions_skips_queries() {
        let store = FakeStore::default();
        PluginPayloads::load(&store, &[], &[module(50, 3, 5)])
            .await
            .unwrap();
        assert!(store.calls().is_empty());
    }
}
