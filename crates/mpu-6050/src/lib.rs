#![no_std]

//! Driver for the InvenSense MPU-6050 6-axis IMU, accelerometer side only.
//!
//! The part powers up asleep; [`Mpu6050::init`] clears the sleep bit and
//! verifies the `WHO_AM_I` register before any data is trusted. Axis data is
//! read as a single 6-byte burst starting at `ACCEL_XOUT_H` and decoded as
//! three big-endian signed 16-bit integers.

use embedded_hal::i2c;
use micromath::F32Ext;

/// 7-bit bus address with AD0 tied low.
pub const DEFAULT_ADDR: u8 = 0x68;
/// 7-bit bus address with AD0 tied high.
pub const ALT_ADDR: u8 = 0x69;

const REG_WHO_AM_I: u8 = 0x75;
const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_ACCEL_CONFIG: u8 = 0x1C;
const REG_ACCEL_XOUT_H: u8 = 0x3B;

/// Value `WHO_AM_I` reports regardless of the AD0 strap.
const WHO_AM_I: u8 = 0x68;

#[derive(derive_more::From, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<I2cError> {
    I2c(I2cError),
    /// The device at the configured address did not identify as an MPU-6050.
    #[from(ignore)]
    InvalidWhoAmI(u8),
}

/// Accelerometer full-scale range (`ACCEL_CONFIG` AFS_SEL field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFsr {
    #[default]
    Fs2G,
    Fs4G,
    Fs8G,
    Fs16G,
}

impl AccelFsr {
    fn afs_sel(self) -> u8 {
        match self {
            Self::Fs2G => 0,
            Self::Fs4G => 1,
            Self::Fs8G => 2,
            Self::Fs16G => 3,
        }
    }

    /// Sensitivity in LSB per g for this range.
    pub fn lsb_per_g(self) -> f32 {
        match self {
            Self::Fs2G => 16384.0,
            Self::Fs4G => 8192.0,
            Self::Fs8G => 4096.0,
            Self::Fs16G => 2048.0,
        }
    }
}

/// One raw accelerometer reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    /// Euclidean norm of the three axes, in raw LSB.
    pub fn magnitude(&self) -> f32 {
        let (x, y, z) = (self.x as f32, self.y as f32, self.z as f32);
        (x * x + y * y + z * z).sqrt()
    }
}

pub struct Mpu6050<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C: i2c::I2c> Mpu6050<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c, addr: DEFAULT_ADDR }
    }

    pub fn with_address(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Verify the device identity and wake it out of power-on sleep.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        let id = self.who_am_i()?;
        if id != WHO_AM_I {
            return Err(Error::InvalidWhoAmI(id));
        }
        // Clear SLEEP and select the internal oscillator.
        self.write_reg(REG_PWR_MGMT_1, 0x00)?;
        Ok(())
    }

    pub fn who_am_i(&mut self) -> Result<u8, Error<I2C::Error>> {
        let mut id = [0u8; 1];
        self.read_regs(REG_WHO_AM_I, &mut id)?;
        Ok(id[0])
    }

    pub fn set_accel_fsr(
        &mut self,
        fsr: AccelFsr,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_reg(REG_ACCEL_CONFIG, fsr.afs_sel() << 3)
    }

    /// Burst-read the three accelerometer axes.
    pub fn read_accel(&mut self) -> Result<AccelSample, Error<I2C::Error>> {
        let mut buf = [0u8; 6];
        self.read_regs(REG_ACCEL_XOUT_H, &mut buf)?;
        Ok(AccelSample {
            x: i16::from_be_bytes([buf[0], buf[1]]),
            y: i16::from_be_bytes([buf[2], buf[3]]),
            z: i16::from_be_bytes([buf[4], buf[5]]),
        })
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }

    fn read_regs(
        &mut self,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c.write_read(self.addr, &[reg], buf).map_err(Error::I2c)
    }

    fn write_reg(
        &mut self,
        reg: u8,
        value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.addr, &[reg, value]).map_err(Error::I2c)
    }
}
