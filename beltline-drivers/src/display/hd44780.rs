//! HD44780 character display driver (4-bit parallel mode)
//!
//! Drives the usual 16x2 status panel through RS, EN, and D4-D7. Only
//! the subset the controller needs is implemented: init-by-instruction,
//! clear, and line writes. Lines are padded to the full panel width so a
//! write never leaves stale characters behind.

use beltline_core::traits::display::{DisplayError, StatusDisplay, DISPLAY_COLS, DISPLAY_ROWS};
use embedded_hal::delay::DelayNs;

use crate::gpio::OutputPin;

/// DDRAM address of the second line
const LINE_TWO_ADDR: u8 = 0x40;

/// HD44780 display in 4-bit mode
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver; call [`Hd44780::init`] before use
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
        }
    }

    /// Run the init-by-instruction sequence and configure 2-line mode
    pub fn init(&mut self) {
        // Power-on settle
        self.delay.delay_ms(50);
        self.rs.set_low();

        // Three 8-bit function-set nibbles force a known state
        self.write_nibble(0x03);
        self.delay.delay_ms(5);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x03);
        self.delay.delay_us(150);

        // Switch to 4-bit transfers
        self.write_nibble(0x02);
        self.delay.delay_us(150);

        // Function set: 4-bit, 2 lines, 5x8 font
        self.command(0x28);
        // Display on, cursor off, blink off
        self.command(0x0C);
        // Entry mode: increment, no shift
        self.command(0x06);
        // Clear needs extra settle time
        self.command(0x01);
        self.delay.delay_ms(2);
    }

    fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.write_byte(byte);
    }

    fn write_data(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.delay.delay_us(50);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
        // Strobe EN; the controller latches on the falling edge
        self.en.set_high();
        self.delay.delay_us(1);
        self.en.set_low();
        self.delay.delay_us(1);
    }
}

impl<P: OutputPin, D: DelayNs> StatusDisplay for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(0x01);
        self.delay.delay_ms(2);
        Ok(())
    }

    fn print(&mut self, line: u8, text: &str) -> Result<(), DisplayError> {
        if line as usize >= DISPLAY_ROWS {
            return Err(DisplayError::InvalidLine);
        }
        let addr = if line == 0 { 0 } else { LINE_TWO_ADDR };
        self.command(0x80 | addr);

        let mut written = 0;
        for byte in text.bytes().take(DISPLAY_COLS) {
            // The panel is ASCII; anything else renders as a blank
            let glyph = if byte.is_ascii_graphic() || byte == b' ' {
                byte
            } else {
                b' '
            };
            self.write_data(glyph);
            written += 1;
        }
        // Pad to the panel width so stale characters never linger
        for _ in written..DISPLAY_COLS {
            self.write_data(b' ');
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock pin that counts rising edges
    struct MockPin {
        high: bool,
        rises: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                rises: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.rises += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// No-op delay for host tests
    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn display() -> Hd44780<MockPin, NoopDelay> {
        Hd44780::new(
            MockPin::new(),
            MockPin::new(),
            [
                MockPin::new(),
                MockPin::new(),
                MockPin::new(),
                MockPin::new(),
            ],
            NoopDelay,
        )
    }

    #[test]
    fn test_print_pads_to_panel_width() {
        let mut lcd = display();
        lcd.print(0, "HI").unwrap();

        // 1 address command + 16 padded characters, 2 EN strobes each
        assert_eq!(lcd.en.rises, 2 + 16 * 2);
    }

    #[test]
    fn test_print_truncates_long_text() {
        let mut lcd = display();
        lcd.print(1, "THIS LINE IS LONGER THAN THE PANEL").unwrap();
        assert_eq!(lcd.en.rises, 2 + 16 * 2);
    }

    #[test]
    fn test_print_rejects_bad_line() {
        let mut lcd = display();
        assert_eq!(lcd.print(2, "NOPE"), Err(DisplayError::InvalidLine));
        assert_eq!(lcd.en.rises, 0);
    }

    #[test]
    fn test_second_line_addressing() {
        let mut lcd = display();
        lcd.print(1, "").unwrap();
        // Address command 0x80 | 0x40 = 0xC0: high nibble 0xC sets D6+D7
        // on the first strobe; after padding, RS ends high (data mode)
        assert!(lcd.rs.is_set_high());
    }
}
