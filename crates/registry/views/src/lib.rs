//! Identity table of the views subsystem.
//!
//! Binds every interface and class of the views subsystem to its permanent id and
//! declares which interfaces each class satisfies. Linking this crate submits the table
//! to the process-wide database ([`iid_registry::db::get_db`]).
//!
//! No constructors are attached here. A crate implementing one of these classes
//! re-declares the class with the same id and a `factory`; the database merges the two
//! declarations.

iid_registry::type_table! {
	/// Views interfaces and classes.
	pub mod views = "views" {
		interface IVwNotifyChange = (0x6C456541, 0xC2B6, 0x11d3, [0x80, 0x78, 0x00, 0x00, 0xC0, 0xFB, 0x81, 0xB5]);
		interface IVwSelection = (0x4F8B678D, 0xC5BA, 0x4a2f, [0xB9, 0xB3, 0x27, 0x80, 0x95, 0x6E, 0x36, 0x16]);
		interface IVwEmbeddedWindow = (0xf6d10646, 0xc00c, 0x11d2, [0x80, 0x78, 0x00, 0x00, 0xc0, 0xfb, 0x81, 0xb5]);
		interface IVwStylesheet = (0xD77C0DBC, 0xC7BC, 0x441d, [0x95, 0x87, 0x1E, 0x36, 0x64, 0xE1, 0xBC, 0xD3]);
		interface IVwEnv = (0x92B462E8, 0x75D5, 0x42c1, [0x8B, 0x63, 0x84, 0x87, 0x8E, 0x89, 0x64, 0xC0]);
		interface IVwViewConstructor = (0x5b1a08f6, 0x9af9, 0x46f9, [0x9f, 0xd7, 0x10, 0x11, 0xa3, 0x03, 0x91, 0x91]);
		interface IVwRootSite = (0xC999413C, 0x28C8, 0x481c, [0x95, 0x43, 0xB0, 0x6C, 0x92, 0xB8, 0x12, 0xD1]);
		interface ISilDataAccess = (0x26E6E70E, 0x53EB, 0x4372, [0x96, 0xF1, 0x0F, 0x47, 0x07, 0xCC, 0xD1, 0xEB]);
		interface IStructuredTextDataAccess = (0xA2A4F9FA, 0xD4E8, 0x4bfb, [0xB6, 0xB7, 0x5F, 0x45, 0xDA, 0xF2, 0xDC, 0x0C]);
		interface IVwCacheDa = (0xB9ADC49A, 0xE28B, 0x4858, [0x8C, 0x04, 0x53, 0xE0, 0xD2, 0xE5, 0xA7, 0x6F]);
		interface IVwRootBox = (0x85DB7D7D, 0xD47B, 0x440e, [0xA2, 0x13, 0xF6, 0x2D, 0x52, 0x24, 0xC9, 0x82]);
		interface IVwPropertyStore = (0x3D4847FE, 0xEA2D, 0x4255, [0xA4, 0x96, 0x77, 0x00, 0x59, 0xA1, 0x34, 0xCC]);
		interface IVwOverlay = (0x7D9089C1, 0x3BB9, 0x11d4, [0x80, 0x78, 0x00, 0x00, 0xC0, 0xFB, 0x81, 0xB5]);
		interface IVwPrintContext = (0xFF2E1DC2, 0x95A8, 0x41c6, [0x85, 0xF4, 0xFF, 0xCA, 0x3A, 0x64, 0x21, 0x6A]);
		interface IVwSearchKiller = (0xFF1B39DE, 0x20D3, 0x4cdd, [0xA1, 0x34, 0xDC, 0xBE, 0x3B, 0xE2, 0x3F, 0x3E]);
		interface IVwSynchronizer = (0xC5C1E9DC, 0x5880, 0x4ee3, [0xB3, 0xCD, 0xEB, 0xDD, 0x13, 0x2A, 0x62, 0x94]);
		interface IVwVirtualHandler = (0x581E3FE0, 0xF0C0, 0x42A7, [0x96, 0xC7, 0x76, 0xB2, 0x3B, 0x8B, 0xE5, 0x80]);
		interface IVwLayoutStream = (0x5DB26616, 0x2741, 0x4688, [0xBC, 0x53, 0x24, 0xC2, 0xA1, 0x3A, 0xCB, 0x9A]);
		interface IVwLayoutManager = (0x13F3A421, 0x4915, 0x455b, [0xB5, 0x7F, 0xAF, 0xD4, 0x07, 0x3C, 0xFF, 0xA0]);
		interface ICheckWord = (0x69F4D944, 0xC786, 0x47EC, [0x94, 0xF7, 0x15, 0x19, 0x3E, 0xED, 0x67, 0x58]);
		interface IGetSpellChecker = (0xF0A60670, 0xD280, 0x45EA, [0xA5, 0xC5, 0xF0, 0xB8, 0x4C, 0x02, 0x7E, 0xFC]);
		class VwCacheDa = (0x81EE73B1, 0xBE31, 0x49cf, [0xBC, 0x02, 0x60, 0x30, 0x11, 0x3A, 0xC5, 0x6F])
			implements [IVwCacheDa, ISilDataAccess, IStructuredTextDataAccess];
		class VwUndoDa = (0x5BEEFFC6, 0xE88C, 0x4258, [0xA2, 0x69, 0xD5, 0x83, 0x90, 0xA1, 0xF2, 0xC9])
			implements [IVwCacheDa, ISilDataAccess, IStructuredTextDataAccess];
		class VwRootBox = (0x705C1A9A, 0xD6DC, 0x4C3F, [0x9B, 0x29, 0x85, 0xF0, 0xC4, 0xF4, 0xB7, 0xBE])
			implements [IVwRootBox, IVwNotifyChange, IVwSelection];
		class VwInvertedRootBox = (0x73BCAB14, 0x2537, 0x4b7d, [0xB1, 0xC7, 0x7E, 0x3D, 0xD7, 0xA0, 0x89, 0xAD])
			implements [IVwRootBox, IVwNotifyChange, IVwSelection];
		class VwStylesheet = (0xCCE2A7ED, 0x464C, 0x4ec7, [0xA0, 0xB0, 0xE3, 0xC1, 0xF6, 0xB9, 0x4C, 0x5A])
			implements [IVwStylesheet];
		class VwPropertyStore = (0xCB59916A, 0xC532, 0x4a57, [0x8C, 0xB4, 0x6E, 0x15, 0x08, 0xB4, 0xDE, 0xC1])
			implements [IVwPropertyStore];
		class VwOverlay = (0x73F5DB01, 0x3D2A, 0x11d4, [0x80, 0x78, 0x00, 0x00, 0xC0, 0xFB, 0x81, 0xB5])
			implements [IVwOverlay];
		class VwPrintContextWin32 = (0x5E9FB977, 0x66AE, 0x4c16, [0xA0, 0x36, 0x1D, 0x40, 0xE7, 0x71, 0x35, 0x73])
			implements [IVwPrintContext];
		interface IVwPattern = (0xEFEBBD00, 0xD418, 0x4157, [0xA7, 0x30, 0xC6, 0x48, 0xBF, 0xFF, 0x3D, 0x8D]);
		class VwPattern = (0x6C659C76, 0x3991, 0x48dd, [0x93, 0xF7, 0xDA, 0x65, 0x84, 0x7D, 0x48, 0x63])
			implements [IVwPattern];
		interface IVwTxtSrcInit2 = (0x8E3EFDB9, 0x4721, 0x4f17, [0xAA, 0x50, 0x48, 0xDF, 0x65, 0x07, 0x86, 0x80]);
		class VwMappedTxtSrc = (0x01D1C8A7, 0x1222, 0x49c9, [0xBF, 0xE6, 0x30, 0xA8, 0x4C, 0xE7, 0x6A, 0x40])
			implements [IVwTxtSrcInit2];
		interface IVwTxtSrcInit = (0x1AB3C970, 0x3EC1, 0x4d97, [0xA7, 0xB8, 0x12, 0x26, 0x42, 0xAF, 0x63, 0x33]);
		class VwStringTextSource = (0xDAF01E81, 0x3026, 0x4480, [0x87, 0x83, 0xEE, 0xA0, 0x4C, 0xD2, 0xEC, 0x80])
			implements [IVwTxtSrcInit];
		class VwSearchKiller = (0x4ADA9157, 0x67F8, 0x499b, [0x88, 0xCE, 0xD6, 0x3D, 0xF9, 0x18, 0xDF, 0x83])
			implements [IVwSearchKiller];
		interface IVwDrawRootBuffered = (0xD9E9D65F, 0xE81F, 0x439e, [0x80, 0x10, 0x5B, 0x22, 0xBA, 0xEB, 0xB9, 0x2D]);
		class VwDrawRootBuffered = (0x97199458, 0x10C7, 0x49da, [0xB3, 0xAE, 0xEA, 0x92, 0x2E, 0xA6, 0x48, 0x59])
			implements [IVwDrawRootBuffered];
		class VwSynchronizer = (0x5E149A49, 0xCAEE, 0x4823, [0x97, 0xF7, 0xBB, 0x9D, 0xED, 0x2A, 0x62, 0xBC])
			implements [IVwSynchronizer];
		class VwLayoutStream = (0x1CD09E06, 0x6978, 0x4969, [0xA1, 0xFC, 0x46, 0x27, 0x23, 0x58, 0x7C, 0x32])
			implements [IVwLayoutStream];
		interface IPictureFactory = (0x110B7E88, 0x2968, 0x11E0, [0xB4, 0x93, 0x00, 0x19, 0xDB, 0xF4, 0x56, 0x6E]);
		class PictureFactory = (0x17A2E876, 0x2968, 0x11E0, [0x80, 0x46, 0x00, 0x19, 0xDB, 0xF4, 0x56, 0x6E])
			implements [IPictureFactory];
		interface IVwWindow = (0x8856396c, 0x63a9, 0x4bc7, [0xad, 0x47, 0x87, 0xec, 0x8b, 0x6e, 0xf5, 0xa4]);
		class VwWindow = (0x3fb0fcd2, 0xac55, 0x42a8, [0xb5, 0x80, 0x73, 0xb8, 0x9a, 0x2b, 0x62, 0x15])
			implements [IVwWindow];
		interface IViewInputMgr = (0xe41668f7, 0xd506, 0x4c8a, [0xa5, 0xd7, 0xfe, 0xae, 0x56, 0x30, 0x79, 0x7e]);
	}
}

pub use views::{MODULE, TABLE, ids};
