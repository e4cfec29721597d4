//! Provider wrapper that counts calls into the software provider

use core::cell::Cell;

use ecshim_api::{EcProvider, Result};
use ecshim_params::{AlgorithmId, BlobType};
use ecshim_provider::{SoftwareKey, SoftwareProvider};

#[derive(Debug, Default)]
pub(crate) struct CountingProvider {
    inner: SoftwareProvider,
    imports: Cell<usize>,
    calls: Cell<usize>,
}

impl CountingProvider {
    /// Calls to `import_key_pair`
    pub fn imports(&self) -> usize {
        self.imports.get()
    }

    /// Calls to any provider operation
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl EcProvider for CountingProvider {
    type Key = SoftwareKey;

    fn name(&self) -> &'static str {
        "counting"
    }

    fn import_key_pair(
        &self,
        algorithm: AlgorithmId,
        blob_type: BlobType,
        blob: &[u8],
    ) -> Result<Self::Key> {
        self.tick();
        self.imports.set(self.imports.get() + 1);
        self.inner.import_key_pair(algorithm, blob_type, blob)
    }

    fn export_key(
        &self,
        key: &Self::Key,
        blob_type: BlobType,
        out: Option<&mut [u8]>,
    ) -> Result<usize> {
        self.tick();
        self.inner.export_key(key, blob_type, out)
    }

    fn sign_hash(&self, key: &Self::Key, hash: &[u8], out: Option<&mut [u8]>) -> Result<usize> {
        self.tick();
        self.inner.sign_hash(key, hash, out)
    }

    fn verify_signature(&self, key: &Self::Key, hash: &[u8], raw_signature: &[u8]) -> Result<()> {
        self.tick();
        self.inner.verify_signature(key, hash, raw_signature)
    }
}
