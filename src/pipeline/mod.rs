//! Collaborator seams and file pipelines
//!
//! The codec treats encryption, transport and persistence as external
//! collaborators. This module defines the trait seams those collaborators
//! plug into and the two orchestrations built on them:
//!
//! - [`OutboundPipeline`]: encode -> encrypt -> upload
//! - [`InboundPipeline`]: download -> decrypt -> decode -> validate -> sink
//!
//! The seams are deliberately narrow. A [`FileCipher`] is an opaque
//! byte-stream transform; a [`FileTransport`] moves payloads without ever
//! inspecting them; a [`RecordSink`] receives decoded records one at a
//! time. Decode and validate complete regardless of what the sink later
//! does with the records.

use crate::codec::{decode, encode, validate};
use crate::types::{
    AchError, AchFile, AchFileRequest, BatchControl, BatchHeader, EntryDetail, FileControl,
    FileHeader,
};
use tracing::info;

/// Opaque byte-stream encryption applied around the codec's text
///
/// Key material is construction-time state of the implementation; the
/// pipelines never see it.
pub trait FileCipher {
    /// Encrypt an outbound plaintext payload
    fn encrypt(&self, plain: &[u8]) -> Result<Vec<u8>, AchError>;

    /// Decrypt an inbound ciphertext payload
    fn decrypt(&self, cipher: &[u8]) -> Result<Vec<u8>, AchError>;
}

/// File movement to and from a remote target
///
/// Implementations never inspect payload contents.
pub trait FileTransport {
    /// Upload a payload under the given remote name
    fn upload(&mut self, remote_name: &str, payload: &[u8]) -> Result<(), AchError>;

    /// Download the payload stored under the given remote name
    fn download(&mut self, remote_name: &str) -> Result<Vec<u8>, AchError>;
}

impl<T: FileTransport + ?Sized> FileTransport for &mut T {
    fn upload(&mut self, remote_name: &str, payload: &[u8]) -> Result<(), AchError> {
        (**self).upload(remote_name, payload)
    }

    fn download(&mut self, remote_name: &str) -> Result<Vec<u8>, AchError> {
        (**self).download(remote_name)
    }
}

/// Durable storage seam receiving decoded records one at a time
pub trait RecordSink {
    fn file_header(&mut self, header: &FileHeader) -> Result<(), AchError>;
    fn batch_header(&mut self, header: &BatchHeader) -> Result<(), AchError>;
    /// An entry, with its owning batch header for context
    fn entry_detail(&mut self, batch: &BatchHeader, entry: &EntryDetail) -> Result<(), AchError>;
    fn batch_control(&mut self, control: &BatchControl) -> Result<(), AchError>;
    fn file_control(&mut self, control: &FileControl) -> Result<(), AchError>;
}

/// Hand every record of a decoded file to the sink, in file order
pub fn deliver(file: &AchFile, sink: &mut dyn RecordSink) -> Result<(), AchError> {
    if let Some(header) = &file.header {
        sink.file_header(header)?;
    }
    for batch in &file.batches {
        sink.batch_header(&batch.header)?;
        for entry in &batch.entries {
            sink.entry_detail(&batch.header, entry)?;
        }
        sink.batch_control(&batch.control)?;
    }
    if let Some(control) = &file.control {
        sink.file_control(control)?;
    }
    Ok(())
}

/// Outbound flow: encode a request, encrypt the text, upload it
pub struct OutboundPipeline<C, T> {
    cipher: C,
    transport: T,
}

impl<C: FileCipher, T: FileTransport> OutboundPipeline<C, T> {
    pub fn new(cipher: C, transport: T) -> Self {
        OutboundPipeline { cipher, transport }
    }

    /// Encode, encrypt and upload one file; returns the plaintext for the
    /// caller to archive
    pub fn send(
        &mut self,
        request: &AchFileRequest,
        remote_name: &str,
    ) -> Result<String, AchError> {
        let text = encode(request)?;
        let payload = self.cipher.encrypt(text.as_bytes())?;
        self.transport.upload(remote_name, &payload)?;
        info!(
            remote = remote_name,
            lines = text.lines().count(),
            "outbound file uploaded"
        );
        Ok(text)
    }
}

/// Inbound flow: download, decrypt, decode, validate, then sink records
pub struct InboundPipeline<C, T> {
    cipher: C,
    transport: T,
}

impl<C: FileCipher, T: FileTransport> InboundPipeline<C, T> {
    pub fn new(cipher: C, transport: T) -> Self {
        InboundPipeline { cipher, transport }
    }

    /// Fetch and process one file; the decoded model is returned after
    /// validation and record delivery succeed
    pub fn receive(
        &mut self,
        remote_name: &str,
        sink: &mut dyn RecordSink,
    ) -> Result<AchFile, AchError> {
        let payload = self.transport.download(remote_name)?;
        let plain = self.cipher.decrypt(&payload)?;
        let text = String::from_utf8_lossy(&plain);
        let lines: Vec<String> = text.lines().map(str::to_string).collect();

        let file = decode(&lines);
        validate(&file)?;
        deliver(&file, sink)?;
        info!(
            remote = remote_name,
            batches = file.batches.len(),
            entries = file.entry_count(),
            "inbound file processed"
        );
        Ok(file)
    }
}
