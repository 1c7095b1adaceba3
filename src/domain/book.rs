use super::errors::BookValidationError;

/// 書籍
///
/// 不変条件：書名と著者名はトリム後に空であってはならない。
/// 不正な値での生成は即座に`BookValidationError`で失敗する。
///
/// 予約状態は `false -> true` の一方向にのみ変化する（戻る遷移はない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    author: String,
    is_reserved: bool,
}

impl Book {
    /// 未予約の書籍を作成する
    ///
    /// # エラー
    /// 書名または著者名が空白のみの場合
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, BookValidationError> {
        Self::with_reservation(name, author, false)
    }

    /// 予約状態を指定して書籍を作成する
    ///
    /// ストレージからの復元やDTOからの変換で使用される。
    pub fn with_reservation(
        name: impl Into<String>,
        author: impl Into<String>,
        is_reserved: bool,
    ) -> Result<Self, BookValidationError> {
        let name = name.into();
        let author = author.into();

        if name.trim().is_empty() {
            return Err(BookValidationError::BlankName);
        }
        if author.trim().is_empty() {
            return Err(BookValidationError::BlankAuthor);
        }

        Ok(Self {
            name,
            author,
            is_reserved,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_reserved(&self) -> bool {
        self.is_reserved
    }

    /// 予約する
    ///
    /// 未予約から予約済みへ遷移した場合のみ`true`を返す。
    /// 既に予約済みなら何もせず`false`。
    pub fn reserve(&mut self) -> bool {
        if self.is_reserved {
            return false;
        }
        self.is_reserved = true;
        true
    }

    /// 一覧表示用のソートキー（大文字小文字を区別しない）
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}
