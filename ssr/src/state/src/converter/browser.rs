use utils::web::{BlobUrl, PickedFile};

use super::{LocalFile, PreviewHandle};

impl PreviewHandle for BlobUrl {
    fn url(&self) -> &str {
        self.as_str()
    }
}

impl LocalFile for PickedFile {
    type Preview = BlobUrl;

    fn name(&self) -> String {
        PickedFile::name(self)
    }

    fn media_type(&self) -> String {
        PickedFile::media_type(self)
    }

    fn create_preview(&self) -> BlobUrl {
        self.object_url()
    }
}
