// SPDX-License-Identifier: GPL-3.0-only

pub mod pokemon;
pub mod pokemon_list;
