use serde::ser::{Serialize, SerializeMap, Serializer};

/// 答案集合：题目ID → 选项值
///
/// 后端按位置把答案和题目对应，所以序列化时保持问卷顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(String, String)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一个答案，同一题目重复写入时覆盖
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        let question_id = question_id.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(id, _)| *id == question_id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((question_id, value)),
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == question_id)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// 分类请求体：`{"respuestas": {...}}`
#[derive(Debug, serde::Serialize)]
pub struct ClassifyRequest<'a> {
    pub respuestas: &'a AnswerSet,
}
