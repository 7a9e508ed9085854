// Macro families for the regular blocks of the opcode grid. Each generated
// method matches the dispatch-table signature and returns the *additional*
// T-cycles beyond the table's base cost (always 0 for these).

macro_rules! ld_r_r {
    ($name:ident, $dst:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$dst = self.$src;
            Ok(0)
        }
    };
}
macro_rules! ld_r_hlp {
    ($name:ident, $dst:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$dst = bus.read_byte(self.get_hl());
            Ok(0)
        }
    };
}
macro_rules! ld_hlp_r {
    ($name:ident, $src:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            bus.write_byte(self.get_hl(), self.$src);
            Ok(0)
        }
    };
}

macro_rules! alu_a_r {
    ($name:ident, $op:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$op(self.$src, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, $src:ident, carry) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$op(self.$src, true);
            Ok(0)
        }
    };
}
macro_rules! alu_a_hlp {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let value = bus.read_byte(self.get_hl());
            self.$op(value, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let value = bus.read_byte(self.get_hl());
            self.$op(value, true);
            Ok(0)
        }
    };
}
macro_rules! alu_a_d8 {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let value = self.read_d8(bus);
            self.$op(value, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let value = self.read_d8(bus);
            self.$op(value, true);
            Ok(0)
        }
    };
}

// CB-prefixed families: rotates/shifts, BIT, RES, SET on a register or (HL).
macro_rules! cb_reg_op {
    ($name:ident, $op:ident, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$reg = self.$op(self.$reg);
            Ok(0)
        }
    };
    ($name:ident, bit, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.op_bit($bit, self.$reg);
            Ok(0)
        }
    };
    ($name:ident, res, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$reg &= !(1 << $bit);
            Ok(0)
        }
    };
    ($name:ident, set, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$reg |= 1 << $bit;
            Ok(0)
        }
    };
}
macro_rules! cb_hlp_op {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let addr = self.get_hl();
            let value = bus.read_byte(addr);
            let result = self.$op(value);
            bus.write_byte(addr, result);
            Ok(0)
        }
    };
    ($name:ident, bit, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let value = bus.read_byte(self.get_hl());
            self.op_bit($bit, value);
            Ok(0)
        }
    };
    ($name:ident, res, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let addr = self.get_hl();
            let value = bus.read_byte(addr);
            bus.write_byte(addr, value & !(1 << $bit));
            Ok(0)
        }
    };
    ($name:ident, set, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let addr = self.get_hl();
            let value = bus.read_byte(addr);
            bus.write_byte(addr, value | (1 << $bit));
            Ok(0)
        }
    };
}

// INC/DEC on a register, and 16-bit pair INC/DEC (no flags).
macro_rules! incdec_r {
    ($name:ident, inc, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$reg = self.inc_u8(self.$reg);
            Ok(0)
        }
    };
    ($name:ident, dec, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            self.$reg = self.dec_u8(self.$reg);
            Ok(0)
        }
    };
}
macro_rules! incdec_rr {
    ($name:ident, $get:ident, $set:ident, $delta:expr) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u16> {
            let value = self.$get();
            self.$set(value.wrapping_add_signed($delta));
            Ok(0)
        }
    };
}
