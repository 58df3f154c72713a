use crate::error::*;
use snafu::ResultExt;
use std::{
    ffi::{c_void, CStr},
    fs::{File, Metadata},
    os::unix::io::IntoRawFd,
    path::Path,
};

/// Helper function to get the error string from errno after a failed libc function call.
unsafe fn strerror() -> Option<&'static str> {
    let errno = *libc::__errno_location();
    let strerror = libc::strerror(errno);
    let cstr = CStr::from_ptr(strerror);
    cstr.to_str().ok()
}

/// A read-only view over the bytes of a file on disk.
///
/// A non-empty file is mmaped over its full extent instead of being copied
/// into a buffer. A zero-length file is represented as an explicit empty view
/// because a zero-length mapping request is invalid.
///
/// The view reflects the file contents at mapping time and stays valid until
/// the value is dropped, which unmaps it.
#[derive(Debug)]
pub struct MappedFile {
    mmap_ptr: *const c_void,
    ptr_len: usize,
}

impl MappedFile {
    /// Try to map the file at `path` for read-only access.
    ///
    /// The file descriptor is closed once the mapping is established since
    /// the mapping remains valid without it. Every failure releases whatever
    /// resource was acquired before it, no error leaves a descriptor or a
    /// mapping behind.
    pub fn map(path: &Path) -> Result<Self> {
        // Open the file and read its length
        let file: File = File::open(path).context(FileOpen { path })?;
        let meta: Metadata = file.metadata().context(FileMeta { path })?;
        let file_len = meta.len() as usize;

        // A zero-length mapping request is rejected by the kernel, return an
        // explicit empty view instead. Dropping `file` closes the descriptor.
        if file_len == 0 {
            return Ok(Self {
                mmap_ptr: std::ptr::null(),
                ptr_len: 0,
            });
        }

        let fd = file.into_raw_fd();

        // mmap the file instead of reading it for speed and low memory consumption
        let mmap_ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                file_len,
                libc::PROT_READ,
                libc::MAP_SHARED,
                fd,
                0,
            )
        };

        if mmap_ptr == libc::MAP_FAILED {
            let strerror = unsafe { strerror() }.unwrap_or("Unknown").to_string();
            unsafe { libc::close(fd) };
            return FileMmap { path, strerror }.fail();
        }

        // The mapping outlives the descriptor, close it now. A failed close
        // must not leak the fresh mapping.
        if unsafe { libc::close(fd) } == -1 {
            let strerror = unsafe { strerror() }.unwrap_or("Unknown").to_string();
            unsafe { libc::munmap(mmap_ptr as *mut c_void, file_len) };
            return FileClose { path, strerror }.fail();
        }

        Ok(Self {
            mmap_ptr,
            ptr_len: file_len,
        })
    }

    /// Return the mapped contents as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        if self.mmap_ptr.is_null() {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(self.mmap_ptr as *const u8, self.ptr_len) }
        }
    }

    /// Length of the view in bytes.
    pub fn len(&self) -> usize {
        self.ptr_len
    }

    pub fn is_empty(&self) -> bool {
        self.ptr_len == 0
    }
}

impl Drop for MappedFile {
    fn drop(&mut self) {
        // munmap the inner pointer if the file was actually mapped
        if !self.mmap_ptr.is_null() {
            unsafe { libc::munmap(self.mmap_ptr as *mut c_void, self.ptr_len) };
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn maps_file_contents() {
        let file = write_temp(b"hello world");
        let mapped = MappedFile::map(file.path()).unwrap();

        assert_eq!(mapped.as_bytes(), b"hello world");
        assert_eq!(mapped.len(), 11);
        assert!(!mapped.is_empty());
    }

    #[test]
    fn zero_length_file_yields_empty_view() {
        let file = write_temp(b"");
        let mapped = MappedFile::map(file.path()).unwrap();

        assert_eq!(mapped.len(), 0);
        assert!(mapped.is_empty());
        assert_eq!(mapped.as_bytes(), b"");
    }

    #[test]
    fn mapping_twice_yields_identical_views() {
        let file = write_temp(b"same bytes either way");
        let first = MappedFile::map(file.path()).unwrap();
        let second = MappedFile::map(file.path()).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist");

        let err = MappedFile::map(&path).unwrap_err();
        match err {
            Error::FileOpen { ref source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected FileOpen, got: {}", other),
        }
    }

    #[test]
    fn directory_fails_to_mmap() {
        // A directory can be opened and stat-ed but not mapped, which
        // exercises the descriptor cleanup on the mmap error path.
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("entry"), b"x").unwrap();

        let err = MappedFile::map(dir.path()).unwrap_err();
        match err {
            Error::FileMmap { .. } => {}
            other => panic!("expected FileMmap, got: {}", other),
        }
    }
}
