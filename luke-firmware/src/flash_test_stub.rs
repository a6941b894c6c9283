use embedded_storage::nor_flash::{
    ErrorType, NorFlash, NorFlashError, NorFlashErrorKind, ReadNorFlash,
};

extern crate std;

#[derive(Debug)]
pub struct FlashStubError(pub NorFlashErrorKind);

impl NorFlashError for FlashStubError {
    fn kind(&self) -> NorFlashErrorKind {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Erase(u32, u32),
    Write(u32, std::vec::Vec<u8>),
}

/// In-memory NOR flash that records every erase and write.
pub struct NorFlashStub<const FLASH_SIZE: usize> {
    pub buf: [u8; FLASH_SIZE],
    pub actions: std::vec::Vec<Action>,
    /// Fail every erase/write with this kind while set.
    pub fail_with: Option<NorFlashErrorKind>,
}

impl<const FLASH_SIZE: usize> NorFlashStub<FLASH_SIZE> {
    pub fn erased() -> Self {
        Self {
            buf: [0xff; FLASH_SIZE],
            ..Default::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::Write(..)))
            .count()
    }

    pub fn erase_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::Erase(..)))
            .count()
    }

    fn check(&self, from: u32, to: usize) -> Result<(), FlashStubError> {
        if let Some(kind) = self.fail_with {
            return Err(FlashStubError(kind));
        }
        if from as usize > to || to > FLASH_SIZE {
            return Err(FlashStubError(NorFlashErrorKind::OutOfBounds));
        }
        Ok(())
    }
}

impl<const FLASH_SIZE: usize> ErrorType for NorFlashStub<FLASH_SIZE> {
    type Error = FlashStubError;
}

impl<const FLASH_SIZE: usize> ReadNorFlash for NorFlashStub<FLASH_SIZE> {
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let offset = offset as usize;
        if offset + bytes.len() > FLASH_SIZE {
            return Err(FlashStubError(NorFlashErrorKind::OutOfBounds));
        }
        bytes.copy_from_slice(&self.buf[offset..offset + bytes.len()]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        FLASH_SIZE
    }
}

impl<const FLASH_SIZE: usize> NorFlash for NorFlashStub<FLASH_SIZE> {
    const WRITE_SIZE: usize = 1;

    const ERASE_SIZE: usize = 64;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        self.check(from, to as usize)?;
        self.actions.push(Action::Erase(from, to));
        self.buf[from as usize..to as usize].fill(0xff);
        Ok(())
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check(offset, offset as usize + bytes.len())?;
        self.actions.push(Action::Write(offset, bytes.into()));
        // NOR flash can only clear bits
        for (t, f) in self.buf[offset as usize..].iter_mut().zip(bytes) {
            *t &= *f;
        }
        Ok(())
    }
}

impl<const FLASH_SIZE: usize> Default for NorFlashStub<FLASH_SIZE> {
    fn default() -> Self {
        Self {
            buf: [0; FLASH_SIZE],
            actions: std::vec::Vec::new(),
            fail_with: None,
        }
    }
}
