use serde::{Deserialize, Serialize};

/// 書籍ID - ストレージ層が採番する正の整数
///
/// 書籍レコード自体はIDを保持しない。
/// 0以下のIDはどの書籍にも一致しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i32);

impl BookId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// ストレージが採番しうるIDか（正の整数か）
    pub fn is_assignable(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
