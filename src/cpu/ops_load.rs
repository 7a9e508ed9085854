use super::{Cpu, CpuResult};
use crate::memory_bus::MemoryBus;

// --- 8/16-bit loads, stack traffic, and the HL-indirect family ---
impl Cpu {
    // LD rr, d16
    pub fn op_ld_bc_d16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.set_bc(value);
        Ok(0)
    }
    pub fn op_ld_de_d16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.set_de(value);
        Ok(0)
    }
    pub fn op_ld_hl_d16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.set_hl(value);
        Ok(0)
    }
    pub fn op_ld_sp_d16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.sp = self.read_d16(bus);
        Ok(0)
    }

    // LD r, d8
    pub fn op_ld_b_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.b = self.read_d8(bus);
        Ok(0)
    }
    pub fn op_ld_c_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.c = self.read_d8(bus);
        Ok(0)
    }
    pub fn op_ld_d_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.d = self.read_d8(bus);
        Ok(0)
    }
    pub fn op_ld_e_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.e = self.read_d8(bus);
        Ok(0)
    }
    pub fn op_ld_h_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.h = self.read_d8(bus);
        Ok(0)
    }
    pub fn op_ld_l_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.l = self.read_d8(bus);
        Ok(0)
    }
    pub fn op_ld_a_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.read_d8(bus);
        Ok(0)
    }
    pub fn op_ld_hlp_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.read_d8(bus);
        bus.write_byte(self.get_hl(), value);
        Ok(0)
    }

    // Accumulator to/from (BC)/(DE)
    pub fn op_ld_bcp_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        bus.write_byte(self.get_bc(), self.a);
        Ok(0)
    }
    pub fn op_ld_dep_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        bus.write_byte(self.get_de(), self.a);
        Ok(0)
    }
    pub fn op_ld_a_bcp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = bus.read_byte(self.get_bc());
        Ok(0)
    }
    pub fn op_ld_a_dep(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = bus.read_byte(self.get_de());
        Ok(0)
    }

    // Accumulator to/from (HL) with post-increment/decrement
    pub fn op_ld_hli_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.get_hl();
        bus.write_byte(addr, self.a);
        self.set_hl(addr.wrapping_add(1));
        Ok(0)
    }
    pub fn op_ld_hld_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.get_hl();
        bus.write_byte(addr, self.a);
        self.set_hl(addr.wrapping_sub(1));
        Ok(0)
    }
    pub fn op_ld_a_hli(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.get_hl();
        self.a = bus.read_byte(addr);
        self.set_hl(addr.wrapping_add(1));
        Ok(0)
    }
    pub fn op_ld_a_hld(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.get_hl();
        self.a = bus.read_byte(addr);
        self.set_hl(addr.wrapping_sub(1));
        Ok(0)
    }

    // Absolute and high-page accumulator transfers
    pub fn op_ld_a16_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        bus.write_byte(addr, self.a);
        Ok(0)
    }
    pub fn op_ld_a_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        self.a = bus.read_byte(addr);
        Ok(0)
    }
    pub fn op_ldh_a8_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_d8(bus);
        bus.write_byte(0xFF00 | offset as u16, self.a);
        Ok(0)
    }
    pub fn op_ldh_a_a8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_d8(bus);
        self.a = bus.read_byte(0xFF00 | offset as u16);
        Ok(0)
    }
    pub fn op_ld_cp_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        bus.write_byte(0xFF00 | self.c as u16, self.a);
        Ok(0)
    }
    pub fn op_ld_a_cp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = bus.read_byte(0xFF00 | self.c as u16);
        Ok(0)
    }

    // SP plumbing
    pub fn op_ld_a16_sp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        bus.write_byte(addr, (self.sp & 0xFF) as u8);
        bus.write_byte(addr.wrapping_add(1), (self.sp >> 8) as u8);
        Ok(0)
    }
    pub fn op_ld_sp_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.sp = self.get_hl();
        Ok(0)
    }
    pub fn op_ld_hl_sp_e8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        let result = self.add_sp_e8(offset);
        self.set_hl(result);
        Ok(0)
    }

    // PUSH / POP
    pub fn op_push_bc(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.get_bc(), bus);
        Ok(0)
    }
    pub fn op_push_de(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.get_de(), bus);
        Ok(0)
    }
    pub fn op_push_hl(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.get_hl(), bus);
        Ok(0)
    }
    pub fn op_push_af(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.get_af(), bus);
        Ok(0)
    }
    pub fn op_pop_bc(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.set_bc(value);
        Ok(0)
    }
    pub fn op_pop_de(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.set_de(value);
        Ok(0)
    }
    pub fn op_pop_hl(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.set_hl(value);
        Ok(0)
    }
    pub fn op_pop_af(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.set_af(value); // F's low nibble is not backed by storage
        Ok(0)
    }

    // The regular LD r, r' block (0x40-0x7F minus HALT)
    ld_r_r!(op_ld_b_b, b, b);
    ld_r_r!(op_ld_b_c, b, c);
    ld_r_r!(op_ld_b_d, b, d);
    ld_r_r!(op_ld_b_e, b, e);
    ld_r_r!(op_ld_b_h, b, h);
    ld_r_r!(op_ld_b_l, b, l);
    ld_r_hlp!(op_ld_b_hlp, b);
    ld_r_r!(op_ld_b_a, b, a);
    ld_r_r!(op_ld_c_b, c, b);
    ld_r_r!(op_ld_c_c, c, c);
    ld_r_r!(op_ld_c_d, c, d);
    ld_r_r!(op_ld_c_e, c, e);
    ld_r_r!(op_ld_c_h, c, h);
    ld_r_r!(op_ld_c_l, c, l);
    ld_r_hlp!(op_ld_c_hlp, c);
    ld_r_r!(op_ld_c_a, c, a);
    ld_r_r!(op_ld_d_b, d, b);
    ld_r_r!(op_ld_d_c, d, c);
    ld_r_r!(op_ld_d_d, d, d);
    ld_r_r!(op_ld_d_e, d, e);
    ld_r_r!(op_ld_d_h, d, h);
    ld_r_r!(op_ld_d_l, d, l);
    ld_r_hlp!(op_ld_d_hlp, d);
    ld_r_r!(op_ld_d_a, d, a);
    ld_r_r!(op_ld_e_b, e, b);
    ld_r_r!(op_ld_e_c, e, c);
    ld_r_r!(op_ld_e_d, e, d);
    ld_r_r!(op_ld_e_e, e, e);
    ld_r_r!(op_ld_e_h, e, h);
    ld_r_r!(op_ld_e_l, e, l);
    ld_r_hlp!(op_ld_e_hlp, e);
    ld_r_r!(op_ld_e_a, e, a);
    ld_r_r!(op_ld_h_b, h, b);
    ld_r_r!(op_ld_h_c, h, c);
    ld_r_r!(op_ld_h_d, h, d);
    ld_r_r!(op_ld_h_e, h, e);
    ld_r_r!(op_ld_h_h, h, h);
    ld_r_r!(op_ld_h_l, h, l);
    ld_r_hlp!(op_ld_h_hlp, h);
    ld_r_r!(op_ld_h_a, h, a);
    ld_r_r!(op_ld_l_b, l, b);
    ld_r_r!(op_ld_l_c, l, c);
    ld_r_r!(op_ld_l_d, l, d);
    ld_r_r!(op_ld_l_e, l, e);
    ld_r_r!(op_ld_l_h, l, h);
    ld_r_r!(op_ld_l_l, l, l);
    ld_r_hlp!(op_ld_l_hlp, l);
    ld_r_r!(op_ld_l_a, l, a);
    ld_hlp_r!(op_ld_hlp_b, b);
    ld_hlp_r!(op_ld_hlp_c, c);
    ld_hlp_r!(op_ld_hlp_d, d);
    ld_hlp_r!(op_ld_hlp_e, e);
    ld_hlp_r!(op_ld_hlp_h, h);
    ld_hlp_r!(op_ld_hlp_l, l);
    ld_hlp_r!(op_ld_hlp_a, a);
    ld_r_r!(op_ld_a_b, a, b);
    ld_r_r!(op_ld_a_c, a, c);
    ld_r_r!(op_ld_a_d, a, d);
    ld_r_r!(op_ld_a_e, a, e);
    ld_r_r!(op_ld_a_h, a, h);
    ld_r_r!(op_ld_a_l, a, l);
    ld_r_hlp!(op_ld_a_hlp, a);
    ld_r_r!(op_ld_a_a, a, a);
}
